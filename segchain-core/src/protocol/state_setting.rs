//! State-setting registers
//!
//! Two 16-bit words configure the driver behaviour before it accepts any
//! channel data. Bit names follow the datasheet letters; bit 15 is sent last
//! (words are shifted LSB first).
//!
//! ```text
//! word 1:  A7 A6 A5 A4 A3 A2 A1 A0  -  -  -  - B1 B0 H0 L0
//! word 2:  C0 D0 E0 F0 G0 I0 J0 K0 M0 N0  -  -  -  -  -  -
//! bit:     15 14 13 12 11 10  9  8  7  6  5  4  3  2  1  0
//! ```

use super::Opcode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named bits of state-setting word 2
pub mod word2 {
    /// C0: thermal shutdown detection inactive
    pub const THERMAL_SHUTDOWN_INACTIVE: u16 = 1 << 15;
    /// D0: PWMCLK open detection inactive
    pub const PWMCLK_OPEN_DETECT_INACTIVE: u16 = 1 << 14;
    /// E0
    pub const E0: u16 = 1 << 13;
    /// F0
    pub const F0: u16 = 1 << 12;
    /// G0: asynchronous mode
    pub const ASYNCHRONOUS_MODE: u16 = 1 << 11;
    /// I0
    pub const I0: u16 = 1 << 10;
    /// J0
    pub const J0: u16 = 1 << 9;
    /// K0
    pub const K0: u16 = 1 << 8;
    /// M0
    pub const M0: u16 = 1 << 7;
    /// N0
    pub const N0: u16 = 1 << 6;
}

/// State-setting word pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateSetting {
    /// Sent with [`Opcode::STATE_SETTING_1`]
    pub data1: u16,
    /// Sent with [`Opcode::STATE_SETTING_2`]
    pub data2: u16,
}

impl StateSetting {
    /// Configuration used by the shipped board: everything in word 1 cleared,
    /// thermal shutdown and PWMCLK open detection off, asynchronous mode.
    pub const DEFAULT: StateSetting = StateSetting::new(
        0x0000,
        word2::THERMAL_SHUTDOWN_INACTIVE
            | word2::PWMCLK_OPEN_DETECT_INACTIVE
            | word2::ASYNCHRONOUS_MODE
            | word2::M0,
    );

    pub const fn new(data1: u16, data2: u16) -> Self {
        Self { data1, data2 }
    }

    /// Set bits in word 2
    pub const fn with_word2(self, bits: u16) -> Self {
        Self {
            data1: self.data1,
            data2: self.data2 | bits,
        }
    }

    /// Clear bits in word 2
    pub const fn without_word2(self, bits: u16) -> Self {
        Self {
            data1: self.data1,
            data2: self.data2 & !bits,
        }
    }

    /// Check if all given bits of word 2 are set
    pub const fn has_word2(&self, bits: u16) -> bool {
        self.data2 & bits == bits
    }

    /// The two (word, opcode) pairs in transmission order
    pub const fn frames(&self) -> [(u16, Opcode); 2] {
        [
            (self.data1, Opcode::STATE_SETTING_1),
            (self.data2, Opcode::STATE_SETTING_2),
        ]
    }
}

impl Default for StateSetting {
    fn default() -> Self {
        Self::DEFAULT
    }
}
