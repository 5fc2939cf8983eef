//! vfdmux Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the display
//! core needs. Chip-specific code (or the `embedded-hal` adapters in
//! `vfdmux-drivers`) implements them; tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vfdmux-firmware (embassy, RP2040)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vfdmux-core / vfdmux-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vfdmux-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output lines (data, clock, latch)
//! - [`delay::DelayUs`] - Busy-wait bit settle delays
//! - [`clock::MillisClock`] - Monotonic millisecond time base

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::MillisClock;
pub use delay::DelayUs;
pub use gpio::OutputPin;
