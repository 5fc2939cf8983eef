//! Blocking delay abstraction
//!
//! Bit timing on the shift-register lines is done by busy-waiting. Keeping
//! it behind a trait lets host tests substitute a no-op or a recorder.

/// Microsecond busy-wait delay
pub trait DelayUs {
    /// Block for at least `us` microseconds
    ///
    /// Implementations must not return early.
    fn delay_us(&mut self, us: u32);
}

impl<D: DelayUs + ?Sized> DelayUs for &mut D {
    fn delay_us(&mut self, us: u32) {
        D::delay_us(self, us)
    }
}

/// Delay that returns immediately
///
/// Useful for host tests and simulators where wall-clock settling is
/// meaningless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayUs for NoDelay {
    fn delay_us(&mut self, _us: u32) {}
}
