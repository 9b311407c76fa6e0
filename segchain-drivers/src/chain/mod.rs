//! LED driver chain
//!
//! Two driver ICs share SIN/SCK/TRANS/PWMCLK; the second one's SIN hangs
//! off the first one's SOUT. The split across files follows the protocol
//! layers:
//!
//! - [`serial`]: shifting words into the chain
//! - [`command`]: TRANS frames and PWMCLK
//! - [`program`]: register programming sequences built from the two above

pub mod command;
pub mod program;
pub mod serial;

use embedded_hal::delay::DelayNs;
use segchain_core::config::Timing;
use segchain_hal::{Level, Line, PinPort};

/// Last level written to each bus line
///
/// The bus is write-only, so this is the only record of what the driver
/// ICs currently see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineState {
    pub data: Level,
    pub clock: Level,
    pub transfer: Level,
    pub pwm_clock: Level,
}

impl LineState {
    /// Level of one line
    pub fn level(&self, line: Line) -> Level {
        match line {
            Line::Data => self.data,
            Line::Clock => self.clock,
            Line::Transfer => self.transfer,
            Line::PwmClock => self.pwm_clock,
        }
    }

    fn set(&mut self, line: Line, level: Level) {
        match line {
            Line::Data => self.data = level,
            Line::Clock => self.clock = level,
            Line::Transfer => self.transfer = level,
            Line::PwmClock => self.pwm_clock = level,
        }
    }

    /// Check if every line is low
    pub fn is_idle(&self) -> bool {
        Line::ALL.iter().all(|&line| !self.level(line).is_high())
    }
}

/// Driver for the daisy-chained LED driver ICs
///
/// Owns the pin port and the delay, so every line write goes through one
/// `&mut self` and stays in program order.
pub struct LedChain<P, D> {
    port: P,
    delay: D,
    timing: Timing,
    lines: LineState,
}

impl<P: PinPort, D: DelayNs> LedChain<P, D> {
    /// Take over the bus
    ///
    /// Configures all four lines as outputs, then drives them low.
    pub fn new(port: P, delay: D, timing: Timing) -> Self {
        let mut chain = Self {
            port,
            delay,
            timing,
            lines: LineState::default(),
        };

        for line in Line::ALL {
            chain.port.set_direction(line, true);
        }
        for line in Line::ALL {
            chain.set(line, Level::Low);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("LED chain bus configured: {}", timing);

        chain
    }

    /// Current level of every line
    pub fn lines(&self) -> LineState {
        self.lines
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Release the pin port and delay
    pub fn into_inner(self) -> (P, D) {
        (self.port, self.delay)
    }

    fn set(&mut self, line: Line, level: Level) {
        self.port.set_level(line, level);
        self.lines.set(line, level);
    }

    pub(crate) fn wait_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, Recorder};

    #[test]
    fn test_bring_up() {
        let recorder = Recorder::new();
        let (port, delay) = recorder.handles();
        let chain = LedChain::new(port, delay, Timing::default());

        let events = recorder.events();
        assert_eq!(
            &events[..4],
            &[
                Event::Direction(Line::Data, true),
                Event::Direction(Line::Clock, true),
                Event::Direction(Line::Transfer, true),
                Event::Direction(Line::PwmClock, true),
            ]
        );
        assert_eq!(
            &events[4..],
            &[
                Event::Level(Line::Data, Level::Low),
                Event::Level(Line::Clock, Level::Low),
                Event::Level(Line::Transfer, Level::Low),
                Event::Level(Line::PwmClock, Level::Low),
            ]
        );
        assert!(chain.lines().is_idle());
    }

    #[test]
    fn test_line_state_tracks_writes() {
        let recorder = Recorder::new();
        let (port, delay) = recorder.handles();
        let mut chain = LedChain::new(port, delay, Timing::default());

        chain.set(Line::Transfer, Level::High);
        assert_eq!(chain.lines().transfer, Level::High);
        assert_eq!(chain.lines().level(Line::Transfer), Level::High);
        assert!(!chain.lines().is_idle());

        chain.set(Line::Transfer, Level::Low);
        assert!(chain.lines().is_idle());
    }
}
