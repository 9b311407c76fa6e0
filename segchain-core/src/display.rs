//! Display cycle state machine
//!
//! The display steps through a fixed list of characters, one state per
//! character, wrapping from the last back to the first. There is no
//! terminal state.

/// Characters shown by the stock firmware
pub const DEFAULT_CYCLE: &str = "ABC";

/// Errors when building a display cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The cycle has no characters
    EmptyCycle,
}

/// Cyclic display state
///
/// The current state is a byte offset into the character string.
#[derive(Debug, Clone)]
pub struct DisplayCycle<'a> {
    chars: &'a str,
    cursor: usize,
}

impl<'a> DisplayCycle<'a> {
    /// Create a cycle over the characters of `chars`, starting at the first
    pub fn new(chars: &'a str) -> Result<Self, DisplayError> {
        if chars.is_empty() {
            return Err(DisplayError::EmptyCycle);
        }
        Ok(Self { chars, cursor: 0 })
    }

    /// Character of the current state
    pub fn current(&self) -> char {
        // cursor always sits on a char boundary of a non-empty string
        self.chars[self.cursor..].chars().next().unwrap_or(' ')
    }

    /// Return the current character and move to the next state
    pub fn advance(&mut self) -> char {
        let ch = self.current();
        self.cursor += ch.len_utf8();
        if self.cursor >= self.chars.len() {
            self.cursor = 0;
        }
        ch
    }

    /// Number of states in the cycle
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    /// Always false; an empty cycle cannot be constructed
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for DisplayCycle<'static> {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CYCLE,
            cursor: 0,
        }
    }
}
