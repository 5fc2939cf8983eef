//! Configuration types
//!
//! Board-agnostic display configuration, loaded from the `display.toml`
//! embedded in the firmware image.

pub mod parse;
pub mod types;

pub use parse::{parse_display_config, ParseError};
pub use types::*;
