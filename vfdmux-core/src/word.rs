//! Shift-register word layout
//!
//! One HV5812 holds 20 output bits. Every multiplexing slice loads a full
//! word into it:
//!
//! ```text
//!  19  18  17  16  15 ............ 8  7 ............. 0
//! ┌───┬───┬───┬───┬─────────────────┬─────────────────┐
//! │ - │G2 │G1 │G0 │  upper digit    │  lower digit    │
//! └───┴───┴───┴───┴─────────────────┴─────────────────┘
//! ```
//!
//! Exactly one gate bit is set per word. The decorative dots reuse the
//! decimal-point segment (bit 7 of a digit lane).

use crate::scheduler::Gate;

/// Width of a shift word in bits
pub const WIDTH: u32 = 20;

/// Mask of the bits that exist on the chip
pub const MASK: u32 = (1 << WIDTH) - 1;

/// Output bit driving each gate grid
pub const GATE_BITS: [u32; Gate::COUNT as usize] = [16, 17, 18];

/// Day separator dot (decimal point of the upper digit)
pub const DAY_DOT: u32 = 0x0000_8000;

/// Month separator dot (decimal point of the lower digit)
pub const MONTH_DOT: u32 = 0x0000_0080;

/// A complete 20-bit load for the shift register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftWord(u32);

impl ShiftWord {
    /// Word with every output off
    pub const ZERO: ShiftWord = ShiftWord(0);

    /// Word with every output on
    pub const ALL: ShiftWord = ShiftWord(MASK);

    /// Build a word from raw bits, discarding anything above bit 19
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & MASK)
    }

    /// Assemble the word for one gate
    pub fn compose(upper: u8, lower: u8, gate: Gate) -> Self {
        let bits = ((upper as u32) << 8) | lower as u32 | gate_mask(gate);
        Self::from_bits(bits)
    }

    /// OR extra bits into the word
    #[must_use]
    pub const fn with_bits(self, bits: u32) -> Self {
        Self::from_bits(self.0 | bits)
    }

    /// Raw value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// State of a single output bit
    pub const fn bit(self, index: u32) -> bool {
        index < WIDTH && (self.0 >> index) & 1 == 1
    }

    /// Upper digit lane
    pub const fn upper(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Lower digit lane
    pub const fn lower(self) -> u8 {
        self.0 as u8
    }

    /// Gate select bits only
    pub fn gate_bits(self) -> u32 {
        self.0 & GATE_BITS.iter().fold(0, |acc, bit| acc | (1 << bit))
    }

    /// Gate selected by this word, if exactly one gate bit is set
    pub fn gate(self) -> Option<Gate> {
        let gates = self.gate_bits();
        if gates.count_ones() != 1 {
            return None;
        }
        GATE_BITS
            .iter()
            .position(|bit| gates == 1 << bit)
            .and_then(|i| Gate::new(i as u8))
    }
}

impl From<ShiftWord> for u32 {
    fn from(word: ShiftWord) -> Self {
        word.bits()
    }
}

/// Single-bit mask selecting a gate
pub fn gate_mask(gate: Gate) -> u32 {
    1 << GATE_BITS[gate.index()]
}
