//! Shared display state
//!
//! The refresh buffer is written by the content task and read by the
//! display task. Both sides go through a critical-section mutex and move
//! whole buffers, so the display always sees a consistent snapshot.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use vfdmux_core::RefreshBuffer;

/// Glyph codes currently on display
pub static REFRESH: Mutex<CriticalSectionRawMutex, Cell<RefreshBuffer>> =
    Mutex::new(Cell::new(RefreshBuffer::blank()));

/// Replace the displayed content
pub fn publish(buffer: RefreshBuffer) {
    REFRESH.lock(|cell| cell.set(buffer));
}

/// Copy of the displayed content
pub fn snapshot() -> RefreshBuffer {
    REFRESH.lock(|cell| cell.get())
}
