//! Display configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scheduler::DEFAULT_INTERVAL_MS;
use crate::segment::TubeVariant;

/// Shortest allowed multiplexing slice (ms)
pub const MIN_MUX_INTERVAL_MS: u32 = 1;

/// Longest allowed multiplexing slice (ms)
///
/// Beyond this three gates flicker visibly.
pub const MAX_MUX_INTERVAL_MS: u32 = 100;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Multiplexing interval outside the allowed range
    IntervalOutOfRange,
}

/// Display hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Tube type fitted to the board
    pub tube: TubeVariant,
    /// Time each gate is shown before moving on (ms)
    pub mux_interval_ms: u32,
    /// Driver BLANK input enables the outputs when low
    pub blank_active_low: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tube: TubeVariant::Iv3a,
            mux_interval_ms: DEFAULT_INTERVAL_MS,
            blank_active_low: true,
        }
    }
}

impl DisplayConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_MUX_INTERVAL_MS..=MAX_MUX_INTERVAL_MS).contains(&self.mux_interval_ms) {
            return Err(ConfigError::IntervalOutOfRange);
        }
        Ok(())
    }

    /// Level to drive the blanking line to for a lit display
    pub fn blank_level_on(&self) -> bool {
        !self.blank_active_low
    }

    /// Full rotation period across all gates (ms), saturating
    pub fn frame_period_ms(&self) -> u32 {
        self.mux_interval_ms
            .saturating_mul(crate::scheduler::Gate::COUNT as u32)
    }
}
