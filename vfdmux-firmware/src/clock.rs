//! Embassy time base for the multiplexer

use embassy_time::Instant;
use vfdmux_hal::MillisClock;

/// Milliseconds since boot from the embassy time driver
///
/// Truncated to `u32`; the multiplexer compares with wrapping arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MillisClock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
