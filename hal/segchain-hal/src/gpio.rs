//! GPIO line abstractions
//!
//! The driver ICs are wired with four single-bit outputs and no feedback
//! line. Instead of one trait object per pin, the board exposes a single
//! port addressed by [`Line`].

/// One of the four logical bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Serial data in (SIN)
    Data,
    /// Shift clock (SCK)
    Clock,
    /// Transfer / latch enable (TRANS, LE)
    Transfer,
    /// Grayscale clock for the PWM counters (PWMCLK, OE)
    PwmClock,
}

impl Line {
    /// All lines, in bring-up order
    pub const ALL: [Line; 4] = [Line::Data, Line::Clock, Line::Transfer, Line::PwmClock];
}

/// Logic level of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    /// Check if this is logic 1
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Pin capability for the driver bus
///
/// Implementations map each [`Line`] onto a physical pin and handle the
/// register manipulation for the specific chip. Writes must take effect in
/// call order; the driver ICs sample on edges.
pub trait PinPort {
    /// Configure a line as output (`true`) or input (`false`)
    fn set_direction(&mut self, line: Line, output: bool);

    /// Drive a line to the given level
    fn set_level(&mut self, line: Line, level: Level);

    /// Drive a line high
    fn set_high(&mut self, line: Line) {
        self.set_level(line, Level::High);
    }

    /// Drive a line low
    fn set_low(&mut self, line: Line) {
        self.set_level(line, Level::Low);
    }
}

impl<T> PinPort for &mut T
where
    T: PinPort,
{
    fn set_direction(&mut self, line: Line, output: bool) {
        T::set_direction(self, line, output);
    }

    fn set_level(&mut self, line: Line, level: Level) {
        T::set_level(self, line, level);
    }
}
