//! Embassy async tasks
//!
//! Each task runs independently and communicates through the shared
//! refresh buffer in `channels`.

pub mod content;
pub mod display;

pub use content::content_task;
pub use display::{display_task, ShiftRegister};
