//! Board-agnostic core logic for the VFD multiplexing firmware
//!
//! This crate contains all display logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment tables for the supported tube types
//! - Shift-register word layout
//! - Refresh buffer shared between content producers and the display
//! - Multiplexing scheduler (gate rotation, dot blinking, rate limiting)
//! - Transport trait implemented by shift-register drivers
//! - Display configuration types and parser
//!
//! # Data flow
//!
//! ```text
//! RefreshBuffer ──► SegmentEncoder ──► ShiftWord::compose ──► WordTransport
//!    (6 codes)        (8-bit lanes)       (20-bit word)         (HV5812)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod refresh;
pub mod scheduler;
pub mod segment;
pub mod traits;
pub mod word;

pub use refresh::RefreshBuffer;
pub use scheduler::{Gate, Multiplexer, SuppressionCounter};
pub use segment::{Glyph, SegmentEncoder, TubeVariant};
pub use traits::WordTransport;
pub use word::ShiftWord;
