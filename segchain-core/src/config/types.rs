//! Timing and chain configuration

use crate::protocol::{StateSetting, DEFAULT_PWM_MAGNITUDE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bus timing
///
/// All delays are busy waits. Defaults match the board the protocol was
/// brought up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// SCK high and low hold while shifting data (ms)
    pub bit_hold_ms: u32,
    /// Spacing of SCK edges and TRANS release inside a command frame (ms)
    pub frame_unit_ms: u32,
    /// Pause after each displayed character (ms)
    pub display_hold_ms: u32,
    /// PWMCLK cycles generated after each displayed character
    pub pwm_pulses: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            bit_hold_ms: 1,
            frame_unit_ms: 1,
            display_hold_ms: 100,
            pwm_pulses: 0xFFFF,
        }
    }
}

/// Everything the power-on sequence needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig {
    pub timing: Timing,
    /// State-setting registers written once at startup
    pub state_setting: StateSetting,
    /// PWM magnitude loaded into all 16 channels
    pub pwm_magnitude: u16,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            state_setting: StateSetting::DEFAULT,
            pwm_magnitude: DEFAULT_PWM_MAGNITUDE,
        }
    }
}
