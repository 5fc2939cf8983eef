//! Multiplexing scheduler
//!
//! Rotates the shift register between the tube gates, composing one word
//! per slice and handing it to the transport.

pub mod gate;
pub mod multiplexer;
pub mod suppression;

pub use gate::{Gate, InvalidGate};
pub use multiplexer::{
    Decoration, Multiplexer, DEFAULT_DECORATIONS, DEFAULT_INTERVAL_MS, MAX_DECORATIONS,
};
pub use suppression::{InvalidCounter, SuppressionCounter, SUPPRESSION_ON, SUPPRESSION_PERIOD};
