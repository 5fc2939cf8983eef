//! Shift-register transport trait

use crate::word::ShiftWord;

/// Sink for complete shift words
///
/// An implementation owns the output lines for the whole call and must
/// make the new word visible all at once (latch after the last bit),
/// never a partially shifted one. There is no acknowledgement on the
/// wire, so the call cannot fail.
pub trait WordTransport {
    /// Shift out and latch one word
    fn transmit(&mut self, word: ShiftWord);
}

impl<T: WordTransport + ?Sized> WordTransport for &mut T {
    fn transmit(&mut self, word: ShiftWord) {
        T::transmit(self, word)
    }
}
