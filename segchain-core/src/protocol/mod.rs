//! Serial protocol of the driver chain
//!
//! Data is shifted in on SIN/SCK one 16-bit word per IC. A command is then
//! selected by the number of SCK pulses issued while TRANS is held high.

pub mod opcode;
pub mod state_setting;

pub use opcode::Opcode;
pub use state_setting::StateSetting;

/// Number of driver ICs in the daisy chain
pub const CHAIN_LENGTH: usize = 2;

/// Width of one serial word in bits
pub const WORD_BITS: u32 = 16;

/// Output channels per driver IC
pub const CHANNEL_COUNT: usize = 16;

/// Default PWM magnitude loaded into every channel at power-on
pub const DEFAULT_PWM_MAGNITUDE: u16 = 0x7FFF;
