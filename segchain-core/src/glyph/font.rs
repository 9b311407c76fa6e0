//! 16-segment font
//!
//! Segment letters follow the usual 16-segment naming; the bit each segment
//! lands on is the driver channel it is wired to.
//!
//! ```text
//!  ─A1─ ─A2─
//! │╲   │   ╱│
//! F H  I  J B
//! │  ╲ │ ╱  │
//!  ─G1─ ─G2─
//! │  ╱ │ ╲  │
//! E M  L  K C
//! │╱   │   ╲│
//!  ─D1─ ─D2─
//! ```

use super::StaticGlyphTable;

/// Channel bit of each segment
pub mod seg {
    pub const A1: u16 = 1 << 0;
    pub const A2: u16 = 1 << 1;
    pub const B: u16 = 1 << 2;
    pub const C: u16 = 1 << 3;
    pub const D2: u16 = 1 << 4;
    pub const D1: u16 = 1 << 5;
    pub const E: u16 = 1 << 6;
    pub const F: u16 = 1 << 7;
    pub const G1: u16 = 1 << 8;
    pub const G2: u16 = 1 << 9;
    pub const H: u16 = 1 << 10;
    pub const I: u16 = 1 << 11;
    pub const J: u16 = 1 << 12;
    pub const K: u16 = 1 << 13;
    pub const L: u16 = 1 << 14;
    pub const M: u16 = 1 << 15;
}

use seg::*;

const TOP: u16 = A1 | A2;
const BOTTOM: u16 = D1 | D2;
const MIDDLE: u16 = G1 | G2;
const LEFT: u16 = E | F;
const RIGHT: u16 = B | C;
const CENTER: u16 = I | L;
const RING: u16 = TOP | BOTTOM | LEFT | RIGHT;

/// Uppercase letters, digits and space
pub const SIXTEEN_SEGMENT: StaticGlyphTable<'static> = StaticGlyphTable::new(&[
    (' ', 0),
    ('A', TOP | LEFT | RIGHT | MIDDLE),
    ('B', TOP | RIGHT | BOTTOM | CENTER | G2),
    ('C', TOP | LEFT | BOTTOM),
    ('D', TOP | RIGHT | BOTTOM | CENTER),
    ('E', TOP | LEFT | BOTTOM | G1),
    ('F', TOP | LEFT | G1),
    ('G', TOP | LEFT | BOTTOM | C | G2),
    ('H', LEFT | RIGHT | MIDDLE),
    ('I', TOP | BOTTOM | CENTER),
    ('J', RIGHT | BOTTOM | E),
    ('K', LEFT | G1 | J | K),
    ('L', LEFT | BOTTOM),
    ('M', LEFT | RIGHT | H | J),
    ('N', LEFT | RIGHT | H | K),
    ('O', RING),
    ('P', TOP | LEFT | B | MIDDLE),
    ('Q', RING | K),
    ('R', TOP | LEFT | B | MIDDLE | K),
    ('S', TOP | F | MIDDLE | C | BOTTOM),
    ('T', TOP | CENTER),
    ('U', LEFT | RIGHT | BOTTOM),
    ('V', LEFT | M | J),
    ('W', LEFT | RIGHT | M | K),
    ('X', H | J | K | M),
    ('Y', H | J | L),
    ('Z', TOP | BOTTOM | J | M),
    ('0', RING | J | M),
    ('1', RIGHT | J),
    ('2', TOP | B | MIDDLE | E | BOTTOM),
    ('3', TOP | RIGHT | G2 | BOTTOM),
    ('4', F | MIDDLE | RIGHT),
    ('5', TOP | F | MIDDLE | C | BOTTOM),
    ('6', TOP | LEFT | MIDDLE | C | BOTTOM),
    ('7', TOP | RIGHT),
    ('8', RING | MIDDLE),
    ('9', TOP | F | RIGHT | MIDDLE | BOTTOM),
]);
