//! Shift-register transports

pub mod embedded;
pub mod hv5812;

pub use embedded::{EhDelay, EhPin};
pub use hv5812::{Hv5812, SETTLE_US};
