//! Shifting words into the chain
//!
//! SIN is set up while SCK is low and sampled on the SCK rising edge.
//! Words go out LSB first; the ICs were brought up with this order and it
//! must not change.

use embedded_hal::delay::DelayNs;
use segchain_core::protocol::{CHAIN_LENGTH, WORD_BITS};
use segchain_hal::{Level, Line, PinPort};

use super::LedChain;

impl<P: PinPort, D: DelayNs> LedChain<P, D> {
    /// Shift one 16-bit word into the first stage of the chain
    ///
    /// Always clocks exactly 16 bits. DATA is low on return.
    pub fn shift_word(&mut self, word: u16) {
        let hold = self.timing.bit_hold_ms;
        let mut remaining = word;

        self.set(Line::Data, Level::Low);
        for _ in 0..WORD_BITS {
            self.set(Line::Data, Level::from(remaining & 0x1 != 0));
            remaining >>= 1;

            self.set(Line::Clock, Level::High);
            self.wait_ms(hold);
            self.set(Line::Clock, Level::Low);
            self.wait_ms(hold);
        }
        self.set(Line::Data, Level::Low);
    }

    /// Shift the same word into every IC of the chain
    ///
    /// A command only takes effect once every stage is filled, so this runs
    /// [`CHAIN_LENGTH`] word shifts back to back. There is no per-IC
    /// addressing.
    pub fn broadcast(&mut self, word: u16) {
        for _ in 0..CHAIN_LENGTH {
            self.shift_word(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use proptest::prelude::*;
    use segchain_core::config::Timing;

    use super::*;
    use crate::mock::{
        data_at_clock_rises, decode, final_level, rising_edges, total_delay_ms, Event, Op,
        Recorder,
    };

    fn shifted(word: u16) -> Vec<Event> {
        let recorder = Recorder::new();
        let (port, delay) = recorder.handles();
        let mut chain = LedChain::new(port, delay, Timing::default());
        recorder.clear();

        chain.shift_word(word);
        recorder.events()
    }

    #[test]
    fn test_shift_word_lsb_first() {
        let events = shifted(0b0000_0000_0000_1101);
        let samples = data_at_clock_rises(&events);

        assert_eq!(samples.len(), 16);
        assert_eq!(&samples[..4], &[true, false, true, true]);
        assert!(samples[4..].iter().all(|&bit| !bit));
    }

    #[test]
    fn test_shift_word_timing() {
        let events = shifted(0xFFFF);

        // One high hold and one low hold per bit
        assert_eq!(total_delay_ms(&events), 32);

        // First bit: data set, clock up, hold, clock down, hold
        assert_eq!(
            &events[..6],
            &[
                Event::Level(Line::Data, Level::Low),
                Event::Level(Line::Data, Level::High),
                Event::Level(Line::Clock, Level::High),
                Event::DelayMs(1),
                Event::Level(Line::Clock, Level::Low),
                Event::DelayMs(1),
            ]
        );
    }

    #[test]
    fn test_shift_word_uses_bit_hold() {
        let recorder = Recorder::new();
        let (port, delay) = recorder.handles();
        let timing = Timing {
            bit_hold_ms: 3,
            ..Timing::default()
        };
        let mut chain = LedChain::new(port, delay, timing);
        recorder.clear();

        chain.shift_word(0);
        assert_eq!(total_delay_ms(&recorder.events()), 16 * 2 * 3);
    }

    #[test]
    fn test_broadcast_fills_chain() {
        let recorder = Recorder::new();
        let (port, delay) = recorder.handles();
        let mut chain = LedChain::new(port, delay, Timing::default());
        recorder.clear();

        chain.broadcast(0xA5C3);
        let events = recorder.events();

        assert_eq!(decode(&events), &[Op::Word(0xA5C3), Op::Word(0xA5C3)]);
        assert_eq!(rising_edges(&events, Line::Clock), 32);
        assert_eq!(rising_edges(&events, Line::Transfer), 0);
        assert!(chain.lines().is_idle());
    }

    proptest! {
        #[test]
        fn prop_shift_word_bits(word in any::<u16>()) {
            let events = shifted(word);
            let samples = data_at_clock_rises(&events);

            prop_assert_eq!(samples.len(), 16);
            for (i, bit) in samples.iter().enumerate() {
                prop_assert_eq!(*bit, (word >> i) & 1 == 1);
            }

            // Data low before the first pulse and after the last
            prop_assert_eq!(events[0], Event::Level(Line::Data, Level::Low));
            prop_assert_eq!(final_level(&events, Line::Data), Level::Low);
            prop_assert_eq!(final_level(&events, Line::Clock), Level::Low);
            prop_assert_eq!(decode(&events), std::vec![Op::Word(word)]);
        }
    }
}
