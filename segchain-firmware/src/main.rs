//! segchain - 16-segment display firmware
//!
//! Brings up a daisy chain of two LED driver ICs on four GPIOs and cycles
//! the configured characters on the display forever.
//!
//! The bus protocol is bit-banged with busy waits; the embassy executor
//! only hosts `main` and the time driver.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use segchain_core::display::DisplayCycle;
use segchain_core::glyph::SIXTEEN_SEGMENT;
use segchain_drivers::{DisplayRunner, LedChain};
use segchain_hal_rp2040::{FlexPort, PinBank, GPIO_COUNT};

mod board;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("segchain firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Pin numbers come from board.toml; build.rs has already range-checked
    // them, this catches a stale generated file
    let pins = board::pins();
    unwrap!(pins.validate(GPIO_COUNT));

    let mut bank = PinBank::new(p);
    let port = FlexPort::new(
        unwrap!(bank.take(pins.data)),
        unwrap!(bank.take(pins.clock)),
        unwrap!(bank.take(pins.transfer)),
        unwrap!(bank.take(pins.pwm_clock)),
    );
    info!(
        "Bus pins: SIN=gpio{} SCK=gpio{} TRANS=gpio{} PWMCLK=gpio{}",
        pins.data, pins.clock, pins.transfer, pins.pwm_clock
    );

    let config = board::chain_config();
    let mut chain = LedChain::new(port, Delay, config.timing);
    chain.initialize(&config.state_setting, config.pwm_magnitude);

    let cycle = unwrap!(DisplayCycle::new(board::DISPLAY_CYCLE));
    info!("Display cycle: {=str}", board::DISPLAY_CYCLE);

    let mut runner = DisplayRunner::new(chain, SIXTEEN_SEGMENT, cycle);
    runner.run_until(|| false);
}
