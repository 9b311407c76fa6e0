//! Command opcodes
//!
//! The driver has no command field. The opcode *is* the SCK pulse count
//! during a TRANS frame, so the numeric value is sent as-is.

/// Driver command, identified by its pulse count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Opcode(u8);

impl Opcode {
    /// S0: store the shifted PWM value in data register 1
    pub const STORE_PWM: Opcode = Opcode(0);
    /// S1: copy data register 1 into data register 2/3 (latch)
    pub const LATCH: Opcode = Opcode(2);
    /// S2: apply the shifted word as on/off data
    pub const ON_OFF: Opcode = Opcode(7);
    /// First state-setting register
    pub const STATE_SETTING_1: Opcode = Opcode(13);
    /// Second state-setting register
    pub const STATE_SETTING_2: Opcode = Opcode(15);

    /// Opcode from a raw pulse count
    pub const fn new(pulses: u8) -> Self {
        Self(pulses)
    }

    /// Number of SCK pulses to issue while TRANS is high
    pub const fn pulses(self) -> u8 {
        self.0
    }
}

impl From<u8> for Opcode {
    fn from(pulses: u8) -> Self {
        Self(pulses)
    }
}
