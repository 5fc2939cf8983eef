//! Refresh buffer
//!
//! Six glyph codes, two per gate. Positions `0..3` are the lower digit of
//! gates 0-2 and positions `3..6` the upper digit, so gate `g` shows
//! `(buffer[g + 3], buffer[g])`.
//!
//! Content producers write whole buffers; the display loop reads a copy.
//! Because the type is `Copy`, sharing it behind a mutex and copying it
//! out gives the display a consistent snapshot for each slice.
//!
//! Reading order for text and numbers runs from position 5 (leftmost)
//! down to position 0 (rightmost).

use crate::scheduler::Gate;
use crate::segment::Glyph;

/// Number of glyph positions
pub const LEN: usize = 6;

/// Glyph codes for all tubes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshBuffer {
    codes: [u8; LEN],
}

impl RefreshBuffer {
    /// All tubes dark
    pub const fn blank() -> Self {
        Self {
            codes: [Glyph::Dark.code(); LEN],
        }
    }

    /// Buffer from raw codes
    ///
    /// Codes are not validated; anything the segment table does not know
    /// renders dark.
    pub const fn from_codes(codes: [u8; LEN]) -> Self {
        Self { codes }
    }

    /// Buffer showing the six least-significant decimal digits of `value`
    pub fn decimal(value: u32) -> Self {
        let mut buffer = Self::blank();
        buffer.write_decimal(value);
        buffer
    }

    /// Buffer showing six glyphs of `text` starting at `offset`
    ///
    /// Positions past the end of the text are dark, which makes stepping
    /// `offset` scroll the text off the display.
    pub fn text(text: &[Glyph], offset: usize) -> Self {
        let mut buffer = Self::blank();
        buffer.write_text(text, offset);
        buffer
    }

    /// Raw codes
    pub const fn codes(&self) -> [u8; LEN] {
        self.codes
    }

    /// Code at a position
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.codes.get(pos).copied()
    }

    /// Replace the code at a position
    ///
    /// Positions past the end are ignored.
    pub fn set(&mut self, pos: usize, code: u8) {
        if let Some(slot) = self.codes.get_mut(pos) {
            *slot = code;
        }
    }

    /// `(upper, lower)` codes shown on a gate
    pub fn pair(&self, gate: Gate) -> (u8, u8) {
        let g = gate.index();
        (self.codes[g + Gate::COUNT as usize], self.codes[g])
    }

    /// Write the six least-significant decimal digits, leading zeros included
    pub fn write_decimal(&mut self, mut value: u32) {
        for slot in self.codes.iter_mut() {
            *slot = (value % 10) as u8;
            value /= 10;
        }
    }

    /// Write six glyphs of `text` starting at `offset`
    pub fn write_text(&mut self, text: &[Glyph], offset: usize) {
        for p in 0..LEN {
            let glyph = offset
                .checked_add(p)
                .and_then(|i| text.get(i))
                .copied()
                .unwrap_or(Glyph::Dark);
            self.codes[LEN - 1 - p] = glyph.code();
        }
    }
}

impl Default for RefreshBuffer {
    fn default() -> Self {
        Self::blank()
    }
}
