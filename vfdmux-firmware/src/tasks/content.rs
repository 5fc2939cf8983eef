//! Display content task
//!
//! Scrolls the status word across the tubes once at power-on, then shows
//! seconds since boot.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use vfdmux_core::segment::STATUS_WORD;
use vfdmux_core::RefreshBuffer;

use crate::channels;

/// Time each scroll position is shown (ms)
const SCROLL_STEP_MS: u64 = 300;

/// Content task - writes whole buffers for the display task to pick up
#[embassy_executor::task]
pub async fn content_task() {
    info!("Content task started");

    let mut ticker = Ticker::every(Duration::from_millis(SCROLL_STEP_MS));
    for offset in 0..=STATUS_WORD.len() {
        channels::publish(RefreshBuffer::text(&STATUS_WORD, offset));
        ticker.next().await;
    }

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_secs(1));

    loop {
        let secs = start.elapsed().as_secs() as u32;
        debug!("Uptime {} s", secs);
        channels::publish(RefreshBuffer::decimal(secs));

        ticker.next().await;
    }
}
