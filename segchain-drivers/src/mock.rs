//! Recording bus for host tests
//!
//! The port and delay handles share one event log, so line writes and
//! waits come out interleaved in the order the driver issued them.

use core::cell::RefCell;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use segchain_hal::{Level, Line, PinPort};

/// One observable bus action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Direction(Line, bool),
    Level(Line, Level),
    DelayMs(u32),
    DelayNs(u32),
}

/// What the driver ICs decode from the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// 16 bits shifted outside a TRANS frame
    Word(u16),
    /// TRANS frame with this many SCK pulses
    Frame(u8),
}

pub struct Recorder {
    events: RefCell<Vec<Event>>,
}

pub struct PortHandle<'a>(&'a Recorder);

pub struct DelayHandle<'a>(&'a Recorder);

impl Recorder {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn handles(&self) -> (PortHandle<'_>, DelayHandle<'_>) {
        (PortHandle(self), DelayHandle(self))
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl PinPort for PortHandle<'_> {
    fn set_direction(&mut self, line: Line, output: bool) {
        self.0.push(Event::Direction(line, output));
    }

    fn set_level(&mut self, line: Line, level: Level) {
        self.0.push(Event::Level(line, level));
    }
}

impl DelayNs for DelayHandle<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
    }
}

/// Replay the events and decode words and frames the way the ICs would
///
/// Bits are sampled on SCK rising edges. Outside a frame they shift into
/// the current word, LSB first; inside a frame they count as pulses.
pub fn decode(events: &[Event]) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut data = Level::Low;
    let mut clock = Level::Low;
    let mut transfer = Level::Low;
    let mut word: u16 = 0;
    let mut bits = 0;
    let mut pulses: u8 = 0;

    for event in events {
        let Event::Level(line, level) = *event else {
            continue;
        };
        match line {
            Line::Data => data = level,
            Line::Clock => {
                if clock == Level::Low && level == Level::High {
                    if transfer.is_high() {
                        pulses += 1;
                    } else {
                        if data.is_high() {
                            word |= 1 << bits;
                        }
                        bits += 1;
                        if bits == 16 {
                            ops.push(Op::Word(word));
                            word = 0;
                            bits = 0;
                        }
                    }
                }
                clock = level;
            }
            Line::Transfer => {
                if transfer == Level::Low && level == Level::High {
                    assert_eq!(bits, 0, "frame started with a partial word");
                    pulses = 0;
                }
                if transfer == Level::High && level == Level::Low {
                    ops.push(Op::Frame(pulses));
                }
                transfer = level;
            }
            Line::PwmClock => {}
        }
    }

    ops
}

/// Opcodes of all frames, in order
pub fn frames(events: &[Event]) -> Vec<u8> {
    decode(events)
        .into_iter()
        .filter_map(|op| match op {
            Op::Frame(pulses) => Some(pulses),
            Op::Word(_) => None,
        })
        .collect()
}

/// Number of low-to-high transitions on `line`
pub fn rising_edges(events: &[Event], line: Line) -> usize {
    let mut level = Level::Low;
    let mut count = 0;
    for event in events {
        if let Event::Level(l, new) = *event {
            if l == line {
                if level == Level::Low && new == Level::High {
                    count += 1;
                }
                level = new;
            }
        }
    }
    count
}

/// DATA level at every SCK rising edge
pub fn data_at_clock_rises(events: &[Event]) -> Vec<bool> {
    let mut data = Level::Low;
    let mut clock = Level::Low;
    let mut samples = Vec::new();
    for event in events {
        match *event {
            Event::Level(Line::Data, level) => data = level,
            Event::Level(Line::Clock, level) => {
                if clock == Level::Low && level == Level::High {
                    samples.push(data.is_high());
                }
                clock = level;
            }
            _ => {}
        }
    }
    samples
}

/// Sum of all millisecond delays
pub fn total_delay_ms(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|event| match *event {
            Event::DelayMs(ms) => u64::from(ms),
            _ => 0,
        })
        .sum()
}

/// Last level written to `line`, or low if never written
pub fn final_level(events: &[Event], line: Line) -> Level {
    events
        .iter()
        .rev()
        .find_map(|event| match *event {
            Event::Level(l, level) if l == line => Some(level),
            _ => None,
        })
        .unwrap_or(Level::Low)
}
