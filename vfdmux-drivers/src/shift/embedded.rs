//! `embedded-hal` adapters
//!
//! Lets any `embedded-hal` 1.0 output pin or delay (embassy, rp-hal,
//! linux-embedded-hal, ...) drive the shift register.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use vfdmux_hal::{DelayUs, OutputPin};

/// Output pin adapter
///
/// Pin errors are dropped: the shift-register protocol has no way to
/// detect or recover from a failed line write, and on-chip GPIO is
/// infallible in practice.
#[derive(Debug)]
pub struct EhPin<P>(P);

impl<P: digital::OutputPin> EhPin<P> {
    /// Wrap an `embedded-hal` output pin
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Unwrap the inner pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: digital::OutputPin> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        let _ = self.0.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.0.set_low();
    }

    fn set_state(&mut self, high: bool) {
        let _ = self.0.set_state(high.into());
    }
}

/// Delay adapter
#[derive(Debug)]
pub struct EhDelay<D>(D);

impl<D: DelayNs> EhDelay<D> {
    /// Wrap an `embedded-hal` delay provider
    pub fn new(delay: D) -> Self {
        Self(delay)
    }

    /// Unwrap the inner delay
    pub fn into_inner(self) -> D {
        self.0
    }
}

impl<D: DelayNs> DelayUs for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl digital::OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_pin_adapter() {
        let mut pin = EhPin::new(MockPin { high: false });

        pin.set_high();
        assert!(pin.0.high);

        pin.set_state(false);
        assert!(!pin.0.high);

        pin.set_state(true);
        assert!(pin.into_inner().high);
    }

    #[test]
    fn test_pin_errors_ignored() {
        let mut pin = EhPin::new(BrokenPin);
        pin.set_high();
        pin.set_low();
        pin.set_state(true);
    }

    #[test]
    fn test_delay_adapter() {
        let mut delay = EhDelay::new(MockDelay { total_ns: 0 });
        delay.delay_us(25);
        delay.delay_us(25);
        assert_eq!(delay.into_inner().total_ns, 50_000);
    }
}
