//! Board-agnostic core definitions for the segchain firmware
//!
//! This crate contains everything that does not touch pins or clocks:
//!
//! - Protocol constants, command opcodes and state-setting words
//! - Timing and pin assignment configuration types
//! - The character table interface and a 16-segment font
//! - The display cycle state machine

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod glyph;
pub mod protocol;
