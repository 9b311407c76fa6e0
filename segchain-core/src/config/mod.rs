//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills these from
//! constants generated out of `board.toml` at build time.

pub mod pins;
pub mod types;

pub use pins::*;
pub use types::*;

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_pins_section() {
        let pins: PinAssignment =
            toml::from_str("data = 2\nclock = 3\ntransfer = 4\npwm_clock = 5\n").unwrap();
        assert_eq!(pins.as_array(), [2, 3, 4, 5]);
        assert_eq!(pins.validate(30), Ok(()));
    }

    #[test]
    fn test_pin_out_of_u8_range() {
        let result =
            toml::from_str::<PinAssignment>("data = 300\nclock = 3\ntransfer = 4\npwm_clock = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_pin() {
        let result = toml::from_str::<PinAssignment>("data = 2\nclock = 3\ntransfer = 4\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_timing_section() {
        let timing: Timing = toml::from_str(
            "bit_hold_ms = 1\nframe_unit_ms = 1\ndisplay_hold_ms = 100\npwm_pulses = 65535\n",
        )
        .unwrap();
        assert_eq!(timing, Timing::default());
    }
}
