//! Gate index

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the tube groups sharing the driver chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Gate(u8);

/// Gate number past the last gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidGate(pub u8);

impl core::fmt::Display for InvalidGate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "gate {} out of range 0..{}", self.0, Gate::COUNT)
    }
}

impl Gate {
    /// Number of gates on the board
    pub const COUNT: u8 = 3;

    /// First gate in the rotation
    pub const FIRST: Gate = Gate(0);

    /// Gate by index, `None` if out of range
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Gate index as a `usize`, always below [`Gate::COUNT`]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw gate number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next gate in the rotation
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// All gates in rotation order
    pub fn all() -> impl Iterator<Item = Gate> {
        (0..Self::COUNT).map(Gate)
    }
}

impl TryFrom<u8> for Gate {
    type Error = InvalidGate;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(InvalidGate(index))
    }
}

impl From<Gate> for u8 {
    fn from(gate: Gate) -> u8 {
        gate.0
    }
}
