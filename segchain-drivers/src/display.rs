//! Display loop
//!
//! Drives one character per state of a [`DisplayCycle`]: on/off data,
//! latch, a burst of PWMCLK to light the segments, then a hold.

use embedded_hal::delay::DelayNs;
use segchain_core::display::DisplayCycle;
use segchain_core::glyph::GlyphTable;
use segchain_hal::PinPort;

use crate::chain::LedChain;

/// Pattern shown for characters missing from the glyph table
pub const BLANK: u16 = 0x0000;

/// Runs the display cycle on an initialized chain
pub struct DisplayRunner<'a, P, D, G> {
    chain: LedChain<P, D>,
    glyphs: G,
    cycle: DisplayCycle<'a>,
}

impl<'a, P: PinPort, D: DelayNs, G: GlyphTable> DisplayRunner<'a, P, D, G> {
    pub fn new(chain: LedChain<P, D>, glyphs: G, cycle: DisplayCycle<'a>) -> Self {
        Self {
            chain,
            glyphs,
            cycle,
        }
    }

    /// Show the current character and advance the cycle
    ///
    /// Returns the character that was shown.
    pub fn step(&mut self) -> char {
        let ch = self.cycle.advance();
        let pattern = match self.glyphs.pattern(ch) {
            Some(pattern) => pattern,
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("No glyph for {}, showing blank", ch);
                BLANK
            }
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("Display {} ({:#x})", ch, pattern);

        let timing = *self.chain.timing();
        self.chain.write_on_off(pattern);
        self.chain.latch();
        self.chain.pwm_clock(timing.pwm_pulses);
        self.chain.wait_ms(timing.display_hold_ms);

        ch
    }

    /// Run a fixed number of states
    pub fn run_for(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Run until `should_stop` returns true
    ///
    /// The condition is checked before every state, never inside one.
    pub fn run_until<F>(&mut self, mut should_stop: F)
    where
        F: FnMut() -> bool,
    {
        while !should_stop() {
            self.step();
        }
    }

    pub fn chain(&self) -> &LedChain<P, D> {
        &self.chain
    }

    pub fn cycle(&self) -> &DisplayCycle<'a> {
        &self.cycle
    }

    /// Stop the display and hand back the chain
    pub fn into_chain(self) -> LedChain<P, D> {
        self.chain
    }
}
