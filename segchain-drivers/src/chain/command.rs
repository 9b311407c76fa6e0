//! Command frames and PWMCLK
//!
//! A command is selected by how many SCK pulses arrive while TRANS is
//! high. Zero pulses is a valid command (S0) and still needs the TRANS
//! pulse.

use embedded_hal::delay::DelayNs;
use segchain_core::protocol::Opcode;
use segchain_hal::{Level, Line, PinPort};

use super::LedChain;

impl<P: PinPort, D: DelayNs> LedChain<P, D> {
    /// Issue a command frame
    ///
    /// TRANS high, `opcode.pulses()` SCK pulses, one more unit wait, TRANS
    /// low. Runs to completion; a cut-short frame would leave the ICs out
    /// of step until the next state-setting sequence.
    pub fn command(&mut self, opcode: Opcode) {
        let unit = self.timing.frame_unit_ms;

        self.set(Line::Transfer, Level::High);
        for _ in 0..opcode.pulses() {
            self.wait_ms(unit);
            self.set(Line::Clock, Level::High);
            self.wait_ms(unit);
            self.set(Line::Clock, Level::Low);
        }
        self.wait_ms(unit);
        self.set(Line::Transfer, Level::Low);
    }

    /// Toggle PWMCLK `pulses` times
    ///
    /// Edges are spaced by a spin hint only, so the frequency depends on the
    /// core clock. Leaves PWMCLK low.
    pub fn pwm_clock(&mut self, pulses: u32) {
        self.set(Line::PwmClock, Level::Low);
        for _ in 0..pulses {
            core::hint::spin_loop();
            self.set(Line::PwmClock, Level::High);
            core::hint::spin_loop();
            self.set(Line::PwmClock, Level::Low);
        }
    }
}
