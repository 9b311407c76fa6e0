//! Pin lookup by GPIO number
//!
//! The board file names pins by number, so the firmware needs to take
//! pins from the peripherals at runtime instead of by field name.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// All GPIO pins, taken one at a time by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

macro_rules! bank {
    ($p:ident, $($pin:ident),* $(,)?) => {
        [$(Some(Peri::<'static, AnyPin>::from($p.$pin))),*]
    };
}

impl PinBank {
    /// Move every GPIO out of the peripherals
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: bank!(
                p, PIN_0, PIN_1, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9, PIN_10,
                PIN_11, PIN_12, PIN_13, PIN_14, PIN_15, PIN_16, PIN_17, PIN_18, PIN_19, PIN_20,
                PIN_21, PIN_22, PIN_23, PIN_24, PIN_25, PIN_26, PIN_27, PIN_28, PIN_29,
            ),
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Check if a pin is still in the bank
    pub fn is_available(&self, pin_num: u8) -> bool {
        matches!(self.pins.get(pin_num as usize), Some(Some(_)))
    }
}
