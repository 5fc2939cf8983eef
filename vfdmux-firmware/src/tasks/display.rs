//! Display multiplexing task
//!
//! Polls the multiplexer much faster than the slice interval; the
//! multiplexer itself decides when a new gate is due.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Delay, Duration, Ticker};

use vfdmux_core::Multiplexer;
use vfdmux_drivers::shift::{EhDelay, EhPin, Hv5812};

use crate::channels;
use crate::clock::EmbassyClock;

/// Poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 1;

/// Shift register wired to embassy GPIO
pub type ShiftRegister = Hv5812<
    EhPin<Output<'static>>,
    EhPin<Output<'static>>,
    EhPin<Output<'static>>,
    EhDelay<Delay>,
>;

/// Display task - owns the shift register for its whole life
#[embassy_executor::task]
pub async fn display_task(mut sr: ShiftRegister, mut mux: Multiplexer) {
    info!(
        "Display task started: {} ms slices, {} tubes",
        mux.interval_ms(),
        mux.encoder().variant()
    );

    // Clear whatever the register powered up with
    mux.blank(&mut sr);

    let clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let buffer = channels::snapshot();
        mux.poll(&clock, &buffer, &mut sr);

        ticker.next().await;
    }
}
