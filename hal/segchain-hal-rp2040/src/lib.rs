//! RP2040-specific HAL for the segchain firmware
//!
//! This crate provides the RP2040 implementation of the shared
//! `segchain-hal` traits:
//!
//! - [`gpio::FlexPort`]: the four bus lines on `embassy_rp` flex pins
//! - [`pins::PinBank`]: GPIO lookup by number for config-driven pin assignment

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::FlexPort;
pub use pins::{PinBank, PinError, GPIO_COUNT};
