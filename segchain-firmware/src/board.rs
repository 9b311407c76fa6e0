//! Board configuration
//!
//! Constants come from board.toml, validated and generated by build.rs.

use segchain_core::config::{ChainConfig, PinAssignment, Timing};
use segchain_core::protocol::StateSetting;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

pub use generated::DISPLAY_CYCLE;

/// GPIO numbers of the bus lines
pub fn pins() -> PinAssignment {
    PinAssignment {
        data: generated::PIN_DATA,
        clock: generated::PIN_CLOCK,
        transfer: generated::PIN_TRANSFER,
        pwm_clock: generated::PIN_PWM_CLOCK,
    }
}

/// Timing and power-on programming for the chain
pub fn chain_config() -> ChainConfig {
    ChainConfig {
        timing: Timing {
            bit_hold_ms: generated::BIT_HOLD_MS,
            frame_unit_ms: generated::FRAME_UNIT_MS,
            display_hold_ms: generated::DISPLAY_HOLD_MS,
            pwm_pulses: generated::PWM_PULSES,
        },
        state_setting: StateSetting::DEFAULT,
        pwm_magnitude: generated::PWM_MAGNITUDE,
    }
}
