//! Segment lookup table
//!
//! One entry per displayable glyph, in the order `0-9`, `a-z`, blank, dash,
//! star. The first 16 entries double as the hexadecimal digit table.

/// Index of the first letter (`a`)
pub const LETTERS_START: usize = 10;

/// Index of the blank glyph
pub const BLANK_INDEX: usize = 36;

/// Index of the dash glyph
pub const DASH_INDEX: usize = 37;

/// Index of the star / degree glyph
pub const STAR_INDEX: usize = 38;

/// Master segment table
//
//   XGFEDCBA
pub static SEGMENTS: [u8; 39] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // a
    0x7C, // b
    0x39, // c
    0x5E, // d
    0x79, // e
    0x71, // f
    0x3D, // g
    0x76, // h
    0x06, // i
    0x1E, // j
    0x76, // k
    0x38, // l
    0x55, // m
    0x54, // n
    0x3F, // o
    0x73, // p
    0x67, // q
    0x50, // r
    0x6D, // s
    0x78, // t
    0x3E, // u
    0x1C, // v
    0x2A, // w
    0x76, // x
    0x6E, // y
    0x5B, // z
    0x00, // blank
    0x40, // dash
    0x63, // star / degree
];

/// Nothing lit
pub const BLANK: u8 = 0x00;

/// Middle bar only
pub const DASH: u8 = 0x40;

/// Upper square, used for degrees
pub const STAR: u8 = 0x63;

/// Decimal point / colon bit
pub const DOT: u8 = 0x80;
