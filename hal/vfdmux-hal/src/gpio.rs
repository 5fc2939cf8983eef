//! GPIO pin abstractions
//!
//! The shift-register protocol only ever drives lines, so only the output
//! half of the usual pin API is modelled here.

/// Digital output pin
///
/// Writes are fire-and-forget: the driver chips behind these lines give
/// no acknowledgement, so there is nothing to report back.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        P::set_high(self)
    }

    fn set_low(&mut self) {
        P::set_low(self)
    }

    fn set_state(&mut self, high: bool) {
        P::set_state(self, high)
    }
}
