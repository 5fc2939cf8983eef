//! Monotonic time base

/// Millisecond clock
///
/// The count wraps at `u32::MAX` (about 49.7 days). Consumers compare
/// timestamps with `wrapping_sub` so the wrap is invisible to them.
pub trait MillisClock {
    /// Milliseconds since an arbitrary fixed epoch (usually boot)
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since `earlier`, tolerant of wrap
    fn elapsed_since(&self, earlier: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier)
    }
}

impl<C: MillisClock + ?Sized> MillisClock for &C {
    fn now_ms(&self) -> u32 {
        C::now_ms(self)
    }
}
