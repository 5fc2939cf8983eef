//! HV5812 high-voltage shift register (bit-banged)
//!
//! The HV5812 is a 20-bit serial-in, parallel-out driver with a latch
//! between the shift stage and the high-voltage outputs. Data is shifted
//! MSB first on the rising clock edge; a low pulse on the latch-enable
//! line copies the shift stage to the outputs.
//!
//! # Sequence
//!
//! ```text
//! DATA  ──<b19>─────<b18>───── ... ──<b0>──────────────────
//! CLK   ______┌──┐_______┌──┐_ ... ______┌──┐______________
//! LE    ───────────────────────── ... ──────────┐____┌────
//!                                                latch
//! ```
//!
//! Each edge is held for [`SETTLE_US`]. Outputs only change on the latch
//! pulse, so a transfer in progress never shows on the tubes.

use vfdmux_core::word::WIDTH;
use vfdmux_core::{ShiftWord, WordTransport};
use vfdmux_hal::{DelayUs, OutputPin};

/// Hold time for every line transition (µs)
///
/// Set by the driver chip's timing at the supply voltage used on the
/// board; not a tuning knob.
pub const SETTLE_US: u32 = 25;

/// HV5812 driven from three GPIO lines
pub struct Hv5812<D, C, L, T> {
    data: D,
    clock: C,
    latch: L,
    delay: T,
}

impl<D, C, L, T> Hv5812<D, C, L, T>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    T: DelayUs,
{
    /// Take ownership of the lines
    ///
    /// Leaves clock low and latch-enable high (transparent latch closed),
    /// ready for the first transfer.
    pub fn new(data: D, clock: C, latch: L, delay: T) -> Self {
        let mut sr = Self {
            data,
            clock,
            latch,
            delay,
        };
        sr.clock.set_low();
        sr.latch.set_high();
        sr
    }

    /// Give the lines back
    pub fn release(self) -> (D, C, L, T) {
        (self.data, self.clock, self.latch, self.delay)
    }

    fn shift_bit(&mut self, high: bool) {
        self.data.set_state(high);
        self.delay.delay_us(SETTLE_US);
        self.clock.set_high();
        self.delay.delay_us(SETTLE_US);
        self.clock.set_low();
    }

    fn pulse_latch(&mut self) {
        self.latch.set_low();
        self.delay.delay_us(SETTLE_US);
        self.latch.set_high();
    }
}

impl<D, C, L, T> WordTransport for Hv5812<D, C, L, T>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    T: DelayUs,
{
    fn transmit(&mut self, word: ShiftWord) {
        #[cfg(feature = "defmt")]
        defmt::trace!("hv5812 <- {=u32:#x}", word.bits());

        for i in (0..WIDTH).rev() {
            self.shift_bit(word.bit(i));
        }
        self.pulse_latch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use proptest::prelude::*;
    use vfdmux_hal::delay::NoDelay;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Data,
        Clock,
        Latch,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Set(Line, bool),
        Delay(u32),
    }

    type Log = RefCell<Vec<Event>>;

    struct LogPin<'a> {
        line: Line,
        log: &'a Log,
    }

    impl OutputPin for LogPin<'_> {
        fn set_high(&mut self) {
            self.log.borrow_mut().push(Event::Set(self.line, true));
        }

        fn set_low(&mut self) {
            self.log.borrow_mut().push(Event::Set(self.line, false));
        }
    }

    struct LogDelay<'a> {
        log: &'a Log,
    }

    impl DelayUs for LogDelay<'_> {
        fn delay_us(&mut self, us: u32) {
            self.log.borrow_mut().push(Event::Delay(us));
        }
    }

    fn driver(log: &Log) -> Hv5812<LogPin<'_>, LogPin<'_>, LogPin<'_>, LogDelay<'_>> {
        Hv5812::new(
            LogPin {
                line: Line::Data,
                log,
            },
            LogPin {
                line: Line::Clock,
                log,
            },
            LogPin {
                line: Line::Latch,
                log,
            },
            LogDelay { log },
        )
    }

    /// Replay a log as the chip would see it: sample data on each rising
    /// clock edge, copy to outputs on each latch-enable pulse.
    #[derive(Debug, Default)]
    struct ChipModel {
        data: bool,
        clock: bool,
        latch: bool,
        shift: u32,
        clocks: u32,
        outputs: u32,
        latches: u32,
        clocks_before_latch: Vec<u32>,
    }

    impl ChipModel {
        fn replay(events: &[Event]) -> Self {
            let mut chip = ChipModel {
                latch: true,
                ..Default::default()
            };
            let mut since_latch = 0;
            for event in events {
                match *event {
                    Event::Set(Line::Data, v) => chip.data = v,
                    Event::Set(Line::Clock, v) => {
                        if v && !chip.clock {
                            chip.shift = ((chip.shift << 1) | chip.data as u32) & 0xF_FFFF;
                            chip.clocks += 1;
                            since_latch += 1;
                        }
                        chip.clock = v;
                    }
                    Event::Set(Line::Latch, v) => {
                        if v && !chip.latch {
                            chip.outputs = chip.shift;
                            chip.latches += 1;
                            chip.clocks_before_latch.push(since_latch);
                            since_latch = 0;
                        }
                        chip.latch = v;
                    }
                    Event::Delay(_) => {}
                }
            }
            chip
        }
    }

    #[test]
    fn test_new_idles_lines() {
        let log = Log::default();
        let _sr = driver(&log);

        assert_eq!(
            *log.borrow(),
            [
                Event::Set(Line::Clock, false),
                Event::Set(Line::Latch, true)
            ]
        );
    }

    #[test]
    fn test_bit_sequence() {
        let log = Log::default();
        let mut sr = driver(&log);
        log.borrow_mut().clear();

        sr.transmit(ShiftWord::from_bits(1 << 19));

        let events = log.borrow();
        // 20 bits × (data, delay, clk↑, delay, clk↓) + (le↓, delay, le↑)
        assert_eq!(events.len(), 20 * 5 + 3);
        assert_eq!(
            events[..5],
            [
                Event::Set(Line::Data, true),
                Event::Delay(SETTLE_US),
                Event::Set(Line::Clock, true),
                Event::Delay(SETTLE_US),
                Event::Set(Line::Clock, false),
            ]
        );
        assert_eq!(events[5], Event::Set(Line::Data, false));
        assert_eq!(
            events[100..],
            [
                Event::Set(Line::Latch, false),
                Event::Delay(SETTLE_US),
                Event::Set(Line::Latch, true),
            ]
        );
    }

    #[test]
    fn test_boundary_words() {
        for word in [ShiftWord::ZERO, ShiftWord::ALL] {
            let log = Log::default();
            let mut sr = driver(&log);
            sr.transmit(word);

            let chip = ChipModel::replay(&log.borrow());
            assert_eq!(chip.clocks, 20);
            assert_eq!(chip.latches, 1);
            assert_eq!(chip.clocks_before_latch, [20]);
            assert_eq!(chip.outputs, word.bits());
        }
    }

    #[test]
    fn test_outputs_change_only_on_latch() {
        let log = Log::default();
        let mut sr = driver(&log);
        sr.transmit(ShiftWord::from_bits(0xA_5A5A));
        let first = log.borrow().len();
        sr.transmit(ShiftWord::from_bits(0x5_A5A5));

        let events = log.borrow();
        // Replay up to the point just before the second latch pulse
        let mid = ChipModel::replay(&events[..events.len() - 3]);
        assert_eq!(mid.outputs, 0xA_5A5A);
        assert_eq!(mid.shift, 0x5_A5A5);
        assert!(events.len() > first);

        let done = ChipModel::replay(&events);
        assert_eq!(done.outputs, 0x5_A5A5);
        assert_eq!(done.clocks_before_latch, [20, 20]);
    }

    #[test]
    fn test_release() {
        let log = Log::default();
        let sr = driver(&log);
        let (data, clock, latch, _delay) = sr.release();
        assert_eq!(data.line, Line::Data);
        assert_eq!(clock.line, Line::Clock);
        assert_eq!(latch.line, Line::Latch);
    }

    #[test]
    fn test_total_settle_time() {
        let log = Log::default();
        let mut sr = driver(&log);
        sr.transmit(ShiftWord::ALL);

        let total: u32 = log
            .borrow()
            .iter()
            .map(|e| match e {
                Event::Delay(us) => *us,
                _ => 0,
            })
            .sum();
        assert_eq!(total, (20 * 2 + 1) * SETTLE_US);
    }

    #[test]
    fn test_borrowed_transport() {
        struct Counter(u32);

        impl OutputPin for Counter {
            fn set_high(&mut self) {
                self.0 += 1;
            }

            fn set_low(&mut self) {}
        }

        let mut clock = Counter(0);
        let mut latch = Counter(0);
        {
            let mut sr = Hv5812::new(Counter(0), &mut clock, &mut latch, NoDelay);
            sr.transmit(ShiftWord::ZERO);
            sr.transmit(ShiftWord::ZERO);
        }
        assert_eq!(clock.0, 40);
        // One from `new`, one per latch pulse
        assert_eq!(latch.0, 3);
    }

    proptest! {
        #[test]
        fn prop_chip_receives_word(bits in 0u32..(1 << 20)) {
            let log = Log::default();
            let mut sr = driver(&log);
            sr.transmit(ShiftWord::from_bits(bits));

            let chip = ChipModel::replay(&log.borrow());
            prop_assert_eq!(chip.outputs, bits);
            prop_assert_eq!(chip.clocks_before_latch, vec![20]);
        }
    }
}
