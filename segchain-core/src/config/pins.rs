//! Bus pin assignment

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors in a pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two lines share the same GPIO
    DuplicatePin(u8),
    /// GPIO number not present on the chip
    InvalidPin(u8),
}

/// GPIO numbers of the four bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// SIN
    pub data: u8,
    /// SCK
    pub clock: u8,
    /// TRANS
    pub transfer: u8,
    /// PWMCLK
    pub pwm_clock: u8,
}

impl PinAssignment {
    /// Pins in bring-up order (data, clock, transfer, pwm clock)
    pub fn as_array(&self) -> [u8; 4] {
        [self.data, self.clock, self.transfer, self.pwm_clock]
    }

    /// Check that every pin exists and no pin is used twice
    ///
    /// `gpio_count` is the number of GPIOs on the target chip.
    pub fn validate(&self, gpio_count: u8) -> Result<(), ConfigError> {
        let pins = self.as_array();

        for (i, &pin) in pins.iter().enumerate() {
            if pin >= gpio_count {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment() -> PinAssignment {
        PinAssignment {
            data: 2,
            clock: 3,
            transfer: 4,
            pwm_clock: 5,
        }
    }

    #[test]
    fn test_valid_assignment() {
        assert_eq!(assignment().validate(30), Ok(()));
        assert_eq!(assignment().as_array(), [2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicate_pin() {
        let mut pins = assignment();
        pins.pwm_clock = 3;
        assert_eq!(pins.validate(30), Err(ConfigError::DuplicatePin(3)));
    }

    #[test]
    fn test_invalid_pin() {
        let mut pins = assignment();
        pins.transfer = 30;
        assert_eq!(pins.validate(30), Err(ConfigError::InvalidPin(30)));

        // Range is checked against the chip
        assert_eq!(pins.validate(48), Ok(()));
    }
}
