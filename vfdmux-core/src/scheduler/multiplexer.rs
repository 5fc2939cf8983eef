//! Gate multiplexer
//!
//! Called from the display loop far more often than the tubes need
//! refreshing. Each call checks the elapsed time and, once the slice
//! interval has passed, loads the next gate's word into the shift register.
//!
//! One advance:
//! 1. Encode the gate's two digits (`upper = buffer[gate + 3]`,
//!    `lower = buffer[gate]`)
//! 2. Compose the shift word with the gate's select bit
//! 3. Step the suppression counter
//! 4. While the counter is in its on half, OR in the gate's decorative dots
//! 5. Transmit
//! 6. Rotate to the next gate

use heapless::Vec;
use vfdmux_hal::MillisClock;

use super::gate::Gate;
use super::suppression::SuppressionCounter;
use crate::config::DisplayConfig;
use crate::refresh::RefreshBuffer;
use crate::segment::{SegmentEncoder, TubeVariant};
use crate::traits::WordTransport;
use crate::word::{ShiftWord, DAY_DOT, MONTH_DOT};

/// Default slice interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u32 = 5;

/// Maximum decorative bits a multiplexer can carry
pub const MAX_DECORATIONS: usize = 4;

/// A non-digit indicator bit tied to one gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoration {
    /// Gate whose word carries the bit
    pub gate: Gate,
    /// Bits OR-ed into that gate's word
    pub mask: u32,
}

const DAY_GATE: Gate = match Gate::new(1) {
    Some(gate) => gate,
    None => Gate::FIRST,
};

const MONTH_GATE: Gate = match Gate::new(2) {
    Some(gate) => gate,
    None => Gate::FIRST,
};

/// Separator dots of the reference board
pub const DEFAULT_DECORATIONS: [Decoration; 2] = [
    Decoration {
        gate: DAY_GATE,
        mask: DAY_DOT,
    },
    Decoration {
        gate: MONTH_GATE,
        mask: MONTH_DOT,
    },
];

const _: () = assert!(DEFAULT_DECORATIONS.len() <= MAX_DECORATIONS);

/// Multiplexing state
///
/// Owned by the display loop; nothing here is global.
#[derive(Debug, Clone)]
pub struct Multiplexer {
    encoder: SegmentEncoder,
    interval_ms: u32,
    gate: Gate,
    suppression: SuppressionCounter,
    last_advance_ms: u32,
    decorations: Vec<Decoration, MAX_DECORATIONS>,
}

impl Multiplexer {
    /// Create a multiplexer with the reference separator dots
    pub fn new(variant: TubeVariant, interval_ms: u32) -> Self {
        // Fits by the const assertion above
        let decorations = Vec::from_slice(&DEFAULT_DECORATIONS).unwrap_or_default();

        Self {
            encoder: SegmentEncoder::new(variant),
            interval_ms,
            gate: Gate::FIRST,
            suppression: SuppressionCounter::new(),
            last_advance_ms: 0,
            decorations,
        }
    }

    /// Create a multiplexer from display configuration
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.tube, config.mux_interval_ms)
    }

    /// Replace the decorative bits
    ///
    /// Entries beyond [`MAX_DECORATIONS`] are dropped.
    pub fn set_decorations(&mut self, decorations: &[Decoration]) {
        let kept = &decorations[..decorations.len().min(MAX_DECORATIONS)];
        self.decorations = Vec::from_slice(kept).unwrap_or_default();
    }

    /// Decorative bits currently applied
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Gate that the next advance will drive
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Suppression counter state
    pub fn suppression(&self) -> SuppressionCounter {
        self.suppression
    }

    /// Timestamp of the most recent advance
    pub fn last_advance_ms(&self) -> u32 {
        self.last_advance_ms
    }

    /// Slice interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Encoder in use
    pub fn encoder(&self) -> &SegmentEncoder {
        &self.encoder
    }

    /// Advance if at least one slice interval has elapsed
    ///
    /// Returns the word that was transmitted, or `None` if it was too
    /// soon. Elapsed time is computed with wrapping arithmetic, so the
    /// millisecond counter rolling over does not stall the display.
    pub fn tick<T: WordTransport>(
        &mut self,
        now_ms: u32,
        buffer: &RefreshBuffer,
        transport: &mut T,
    ) -> Option<ShiftWord> {
        if now_ms.wrapping_sub(self.last_advance_ms) < self.interval_ms {
            return None;
        }

        let word = self.advance(buffer, transport);
        self.last_advance_ms = now_ms;
        Some(word)
    }

    /// [`Multiplexer::tick`] reading the time from a clock
    pub fn poll<C: MillisClock, T: WordTransport>(
        &mut self,
        clock: &C,
        buffer: &RefreshBuffer,
        transport: &mut T,
    ) -> Option<ShiftWord> {
        self.tick(clock.now_ms(), buffer, transport)
    }

    /// Advance unconditionally
    ///
    /// Does not touch the last-advance timestamp.
    pub fn advance<T: WordTransport>(
        &mut self,
        buffer: &RefreshBuffer,
        transport: &mut T,
    ) -> ShiftWord {
        self.suppression.increment();
        let word = self.compose(buffer, self.gate, self.suppression.is_on());

        transport.transmit(word);
        self.gate = self.gate.next();
        word
    }

    /// Build the word a gate would receive
    ///
    /// Pure; `dots` selects whether the gate's decorative bits are added.
    pub fn compose(&self, buffer: &RefreshBuffer, gate: Gate, dots: bool) -> ShiftWord {
        let (upper, lower) = buffer.pair(gate);
        let word = ShiftWord::compose(self.encoder.encode(upper), self.encoder.encode(lower), gate);

        if dots {
            word.with_bits(self.decoration_bits(gate))
        } else {
            word
        }
    }

    /// Load an all-dark word without advancing
    ///
    /// Used to clear whatever the register held at power-on.
    pub fn blank<T: WordTransport>(&self, transport: &mut T) {
        transport.transmit(ShiftWord::ZERO);
    }

    fn decoration_bits(&self, gate: Gate) -> u32 {
        self.decorations
            .iter()
            .filter(|d| d.gate == gate)
            .fold(0, |acc, d| acc | d.mask)
    }
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::new(TubeVariant::default(), DEFAULT_INTERVAL_MS)
    }
}
