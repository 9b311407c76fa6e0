//! Register programming sequences
//!
//! Each sequence is a fixed script of broadcasts and command frames. The
//! bus has no readback, so nothing here can report failure.

use embedded_hal::delay::DelayNs;
use segchain_core::protocol::{Opcode, StateSetting, CHANNEL_COUNT};
use segchain_hal::PinPort;

use super::LedChain;

impl<P: PinPort, D: DelayNs> LedChain<P, D> {
    /// Write both state-setting registers
    ///
    /// Must run once after power-on, before any channel data.
    pub fn write_state_setting(&mut self, setting: &StateSetting) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "State setting: {:#x} {:#x}",
            setting.data1,
            setting.data2
        );

        for (word, opcode) in setting.frames() {
            self.broadcast(word);
            self.command(opcode);
        }
    }

    /// Load one PWM value per output channel, then latch them together
    ///
    /// `values[k]` is the k-th value stored into data register 1.
    pub fn load_pwm_channels(&mut self, values: &[u16; CHANNEL_COUNT]) {
        for &value in values {
            self.broadcast(value);
            self.command(Opcode::STORE_PWM);
        }
        self.command(Opcode::LATCH);
    }

    /// Load the same PWM magnitude into all 16 channels
    pub fn load_pwm_registers(&mut self, magnitude: u16) {
        #[cfg(feature = "defmt")]
        defmt::debug!("PWM registers: {:#x}", magnitude);

        self.load_pwm_channels(&[magnitude; CHANNEL_COUNT]);
    }

    /// Shift in an on/off mask for the 16 channels and apply it
    pub fn write_on_off(&mut self, mask: u16) {
        self.broadcast(mask);
        self.command(Opcode::ON_OFF);
    }

    /// Promote data register 1 into register 2/3
    pub fn latch(&mut self) {
        self.command(Opcode::LATCH);
    }

    /// Power-on sequence: state setting, then PWM registers
    pub fn initialize(&mut self, setting: &StateSetting, magnitude: u16) {
        self.write_state_setting(setting);
        self.load_pwm_registers(magnitude);

        #[cfg(feature = "defmt")]
        defmt::info!("LED chain initialized");
    }
}
