//! Hardware driver for the LED driver chain
//!
//! This crate implements the bit-banged bus protocol on top of the
//! `segchain-hal` pin capability and an `embedded-hal` delay:
//!
//! - Word serializer and chain broadcast (SIN/SCK)
//! - Command framing by pulse count (TRANS/SCK)
//! - Software PWMCLK generation
//! - The power-on and per-character command sequences
//! - The display loop runner

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod chain;
pub mod display;

#[cfg(test)]
mod mock;

pub use chain::{LedChain, LineState};
pub use display::DisplayRunner;
