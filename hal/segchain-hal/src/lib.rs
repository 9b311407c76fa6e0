//! segchain Hardware Abstraction Layer
//!
//! This crate defines the pin capability the protocol driver is written
//! against. Chip-specific crates implement it, so the same driver code runs
//! on the RP2040 and against recording mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segchain-drivers (protocol + display)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segchain-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ segchain-hal- │       │  host mocks   │
//! │    rp2040     │       │  (tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinPort`] - Direction and level control for the four bus lines

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{Level, Line, PinPort};
