//! Segment encoder
//!
//! Maps glyph codes to the 8-bit segment patterns of the tube type in use.
//! The table is chosen once, when the encoder is built, and never changes
//! afterwards.

pub mod tables;

pub use tables::{BLANK, DECIMAL_POINT, IV22B, IV3A, TABLE_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Glyph codes understood by every segment table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Glyph {
    Digit0 = 0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    HexA,
    HexB,
    HexC,
    HexD,
    HexE,
    HexF,
    /// All segments off
    Dark,
    /// Status-word `4`
    Four,
    /// Status-word `2`
    Two,
    LetterN,
    LetterI,
    LetterB,
    /// Second `b` of the status word (same pattern, own code)
    LetterBb,
    LetterL,
    LetterE,
    LetterS,
}

/// Every named glyph, in code order
const GLYPHS: [Glyph; 26] = [
    Glyph::Digit0,
    Glyph::Digit1,
    Glyph::Digit2,
    Glyph::Digit3,
    Glyph::Digit4,
    Glyph::Digit5,
    Glyph::Digit6,
    Glyph::Digit7,
    Glyph::Digit8,
    Glyph::Digit9,
    Glyph::HexA,
    Glyph::HexB,
    Glyph::HexC,
    Glyph::HexD,
    Glyph::HexE,
    Glyph::HexF,
    Glyph::Dark,
    Glyph::Four,
    Glyph::Two,
    Glyph::LetterN,
    Glyph::LetterI,
    Glyph::LetterB,
    Glyph::LetterBb,
    Glyph::LetterL,
    Glyph::LetterE,
    Glyph::LetterS,
];

/// Status banner shown at power-on ("42nibbleS")
pub const STATUS_WORD: [Glyph; 9] = [
    Glyph::Four,
    Glyph::Two,
    Glyph::LetterN,
    Glyph::LetterI,
    Glyph::LetterB,
    Glyph::LetterBb,
    Glyph::LetterL,
    Glyph::LetterE,
    Glyph::LetterS,
];

impl Glyph {
    /// Raw code used to index the segment tables
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a glyph by raw code
    pub fn from_code(code: u8) -> Option<Self> {
        GLYPHS.get(code as usize).copied()
    }

    /// Glyph for a hexadecimal digit value (0-15)
    pub fn from_digit(value: u8) -> Option<Self> {
        if value < 16 {
            Self::from_code(value)
        } else {
            None
        }
    }
}

impl From<Glyph> for u8 {
    fn from(glyph: Glyph) -> Self {
        glyph.code()
    }
}

/// Tube wiring variant
///
/// The two supported tube types route the same logical segments to
/// different driver outputs, so each needs its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TubeVariant {
    /// IV-3A single-digit tubes
    #[default]
    Iv3a,
    /// IV-22B single-digit tubes
    Iv22b,
}

impl TubeVariant {
    /// Segment table for this variant
    pub const fn table(self) -> &'static [u8; TABLE_LEN] {
        match self {
            TubeVariant::Iv3a => &IV3A,
            TubeVariant::Iv22b => &IV22B,
        }
    }

    /// Name used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            TubeVariant::Iv3a => "iv3a",
            TubeVariant::Iv22b => "iv22b",
        }
    }

    /// Parse a configuration name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("iv3a") {
            Some(TubeVariant::Iv3a)
        } else if name.eq_ignore_ascii_case("iv22b") {
            Some(TubeVariant::Iv22b)
        } else {
            None
        }
    }
}

/// Glyph code to segment pattern lookup
#[derive(Debug, Clone, Copy)]
pub struct SegmentEncoder {
    variant: TubeVariant,
    table: &'static [u8; TABLE_LEN],
}

impl SegmentEncoder {
    /// Create an encoder for the given tube type
    pub const fn new(variant: TubeVariant) -> Self {
        Self {
            variant,
            table: variant.table(),
        }
    }

    /// Tube type this encoder was built for
    pub fn variant(&self) -> TubeVariant {
        self.variant
    }

    /// Segment pattern for a raw glyph code
    ///
    /// Codes past the end of the table encode as [`BLANK`].
    #[inline]
    pub fn encode(&self, code: u8) -> u8 {
        self.table.get(code as usize).copied().unwrap_or(BLANK)
    }

    /// Segment pattern for a named glyph
    pub fn glyph(&self, glyph: Glyph) -> u8 {
        self.encode(glyph.code())
    }
}

impl Default for SegmentEncoder {
    fn default() -> Self {
        Self::new(TubeVariant::default())
    }
}
