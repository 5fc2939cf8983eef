//! Decorative dot blink counter
//!
//! The separator dots are not time-based: they follow a fixed duty cycle
//! counted in scheduler advances. The counter runs modulo
//! [`SUPPRESSION_PERIOD`] and the dots are lit while it is below
//! [`SUPPRESSION_ON`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counter period in advances
pub const SUPPRESSION_PERIOD: u8 = 200;

/// Counter values below this assert the decorative bits
pub const SUPPRESSION_ON: u8 = 100;

/// Advance counter gating the decorative bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct SuppressionCounter(u8);

/// Counter value at or past [`SUPPRESSION_PERIOD`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidCounter(pub u8);

impl core::fmt::Display for InvalidCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "suppression counter {} out of range 0..{}",
            self.0, SUPPRESSION_PERIOD
        )
    }
}

impl SuppressionCounter {
    /// Counter starting at zero
    pub const fn new() -> Self {
        Self(0)
    }

    /// Counter at an arbitrary position, reduced modulo the period
    pub const fn at(value: u8) -> Self {
        Self(value % SUPPRESSION_PERIOD)
    }

    /// Current value, always below [`SUPPRESSION_PERIOD`]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Step once, wrapping to zero on reaching the period
    pub fn increment(&mut self) -> u8 {
        self.0 = (self.0 + 1) % SUPPRESSION_PERIOD;
        self.0
    }

    /// Whether decorative bits are asserted at the current value
    pub const fn is_on(self) -> bool {
        self.0 < SUPPRESSION_ON
    }
}

/// Exact conversion; unlike [`SuppressionCounter::at`] nothing is reduced
impl TryFrom<u8> for SuppressionCounter {
    type Error = InvalidCounter;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < SUPPRESSION_PERIOD {
            Ok(Self(value))
        } else {
            Err(InvalidCounter(value))
        }
    }
}

impl From<SuppressionCounter> for u8 {
    fn from(counter: SuppressionCounter) -> u8 {
        counter.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        assert!(SuppressionCounter::at(0).is_on());
        assert!(SuppressionCounter::at(99).is_on());
        assert!(!SuppressionCounter::at(100).is_on());
        assert!(!SuppressionCounter::at(199).is_on());
    }

    #[test]
    fn test_wraps_at_period() {
        let mut counter = SuppressionCounter::at(199);
        assert_eq!(counter.increment(), 0);
        assert!(counter.is_on());
    }

    #[test]
    fn test_at_reduces() {
        assert_eq!(SuppressionCounter::at(200).value(), 0);
        assert_eq!(SuppressionCounter::at(255).value(), 55);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(SuppressionCounter::try_from(199).map(u8::from), Ok(199));
        assert_eq!(SuppressionCounter::try_from(200), Err(InvalidCounter(200)));
        assert_eq!(SuppressionCounter::try_from(250), Err(InvalidCounter(250)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_out_of_range() {
        use serde::de::value::{Error, U8Deserializer};
        use serde::de::IntoDeserializer;

        let de: U8Deserializer<Error> = 42u8.into_deserializer();
        assert_eq!(SuppressionCounter::deserialize(de).unwrap().value(), 42);

        let de: U8Deserializer<Error> = 250u8.into_deserializer();
        assert!(SuppressionCounter::deserialize(de).is_err());
    }

    #[test]
    fn test_duty_cycle() {
        let mut counter = SuppressionCounter::new();
        let mut on = 0;
        for _ in 0..SUPPRESSION_PERIOD as u32 * 3 {
            counter.increment();
            assert!(counter.value() < SUPPRESSION_PERIOD);
            if counter.is_on() {
                on += 1;
            }
        }
        assert_eq!(on, SUPPRESSION_ON as u32 * 3);
    }
}
