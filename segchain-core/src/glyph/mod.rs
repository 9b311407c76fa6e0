//! Character table interface
//!
//! Maps a character to the 16-bit on/off pattern of the display outputs.
//! Bit i of the pattern is driver channel i.

pub mod font;

pub use font::SIXTEEN_SEGMENT;

/// Lookup from character to channel pattern
pub trait GlyphTable {
    /// Pattern for `ch`, or `None` if the table has no glyph for it
    fn pattern(&self, ch: char) -> Option<u16>;
}

impl<T> GlyphTable for &T
where
    T: GlyphTable + ?Sized,
{
    fn pattern(&self, ch: char) -> Option<u16> {
        T::pattern(self, ch)
    }
}

/// Table backed by a static slice of `(char, pattern)` entries
#[derive(Debug, Clone, Copy)]
pub struct StaticGlyphTable<'a> {
    entries: &'a [(char, u16)],
}

impl<'a> StaticGlyphTable<'a> {
    pub const fn new(entries: &'a [(char, u16)]) -> Self {
        Self { entries }
    }

    /// Number of glyphs in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlyphTable for StaticGlyphTable<'_> {
    fn pattern(&self, ch: char) -> Option<u16> {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, pattern)| pattern)
    }
}
