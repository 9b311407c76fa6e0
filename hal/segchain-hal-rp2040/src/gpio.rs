//! Bus lines on RP2040 GPIOs
//!
//! Flex pins are used so the direction can be set through the capability
//! interface like any other line write.

use embassy_rp::gpio::{AnyPin, Flex};
use embassy_rp::Peri;
use segchain_hal::{Level, Line, PinPort};

/// The four bus lines on RP2040 pins
pub struct FlexPort<'d> {
    data: Flex<'d>,
    clock: Flex<'d>,
    transfer: Flex<'d>,
    pwm_clock: Flex<'d>,
}

impl<'d> FlexPort<'d> {
    /// Wrap the pins; all start as inputs until the driver configures them
    pub fn new(
        data: Peri<'d, AnyPin>,
        clock: Peri<'d, AnyPin>,
        transfer: Peri<'d, AnyPin>,
        pwm_clock: Peri<'d, AnyPin>,
    ) -> Self {
        Self {
            data: Flex::new(data),
            clock: Flex::new(clock),
            transfer: Flex::new(transfer),
            pwm_clock: Flex::new(pwm_clock),
        }
    }

    fn pin(&mut self, line: Line) -> &mut Flex<'d> {
        match line {
            Line::Data => &mut self.data,
            Line::Clock => &mut self.clock,
            Line::Transfer => &mut self.transfer,
            Line::PwmClock => &mut self.pwm_clock,
        }
    }
}

impl PinPort for FlexPort<'_> {
    fn set_direction(&mut self, line: Line, output: bool) {
        let pin = self.pin(line);
        if output {
            pin.set_as_output();
        } else {
            pin.set_as_input();
        }
    }

    fn set_level(&mut self, line: Line, level: Level) {
        let pin = self.pin(line);
        match level {
            Level::High => pin.set_high(),
            Level::Low => pin.set_low(),
        }
    }
}
