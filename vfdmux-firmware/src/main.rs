//! vfdmux - VFD Tube Multiplexing Firmware
//!
//! Main firmware binary for RP2040 boards driving six seven-segment VFD
//! tubes through one HV5812 shift register, three gates multiplexed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vfdmux_core::config::{parse_display_config, DisplayConfig};
use vfdmux_core::Multiplexer;
use vfdmux_drivers::shift::{EhDelay, EhPin, Hv5812};

mod board;
mod channels;
mod clock;
mod tasks;

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// BLANK line, held for the life of the firmware
static BLANK: StaticCell<Output<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("vfdmux firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Enable the driver outputs once; nothing touches this line afterwards
    let blank_level = if config.blank_level_on() {
        Level::High
    } else {
        Level::Low
    };
    // Pin fields must match board::*_PIN
    BLANK.init(Output::new(p.PIN_16, blank_level));

    // Clock low, latch high before the first transfer
    let sr = Hv5812::new(
        EhPin::new(Output::new(p.PIN_13, Level::Low)),
        EhPin::new(Output::new(p.PIN_12, Level::Low)),
        EhPin::new(Output::new(p.PIN_14, Level::High)),
        EhDelay::new(Delay),
    );
    info!(
        "HV5812 on GPIO{} (data), GPIO{} (clk), GPIO{} (latch), blank GPIO{}",
        board::DATA_PIN,
        board::CLOCK_PIN,
        board::LATCH_PIN,
        board::BLANK_PIN
    );

    let mux = Multiplexer::from_config(&config);

    spawner.spawn(tasks::display_task(sr, mux)).unwrap();
    spawner.spawn(tasks::content_task()).unwrap();

    info!("All tasks spawned");
}

/// Parse the embedded display.toml, falling back to defaults
fn load_config() -> DisplayConfig {
    match parse_display_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: tube={}, mux_interval={} ms, blank_active_low={}",
                config.tube.name(),
                config.mux_interval_ms,
                config.blank_active_low
            );
            config
        }
        Err(e) => {
            warn!("display.toml rejected ({}), using defaults", e);
            DisplayConfig::default()
        }
    }
}
