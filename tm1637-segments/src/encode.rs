//! Character and number encoding
//!
//! Unknown characters never abort the caller: they are reported and shown
//! as a blank digit so the rest of the display stays readable.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::table::{BLANK, DASH, LETTERS_START, SEGMENTS, STAR};

/// Number of digit positions on a standard TM1637 module
pub const DIGITS: usize = 4;

/// Encoded text, one segment value per character
pub type Segments = Vec<u8, DIGITS>;

/// Convert a value 0-15 to its hexadecimal digit segments
///
/// Only the low nibble is used.
pub fn encode_digit(digit: u8) -> u8 {
    SEGMENTS[usize::from(digit & 0x0F)]
}

/// Convert a character to segments, if it has a glyph
///
/// Accepts `0-9`, `a-z` (either case), space, `-` and `*`.
pub fn try_encode_char(c: char) -> Option<u8> {
    let index = match c {
        ' ' => return Some(BLANK),
        '*' => return Some(STAR),
        '-' => return Some(DASH),
        'A'..='Z' => LETTERS_START + (c as usize - 'A' as usize),
        'a'..='z' => LETTERS_START + (c as usize - 'a' as usize),
        '0'..='9' => c as usize - '0' as usize,
        _ => return None,
    };
    SEGMENTS.get(index).copied()
}

/// Convert a character to segments
///
/// Characters without a glyph are logged and encoded as [`BLANK`].
pub fn encode_char(c: char) -> u8 {
    match try_encode_char(c) {
        Some(segments) => segments,
        None => {
            #[cfg(feature = "defmt")]
            defmt::error!("Character out of range: {}", c);
            BLANK
        }
    }
}

/// Encode the first [`DIGITS`] characters of a string
///
/// Anything past the fourth character is dropped.
pub fn encode_string(s: &str) -> Segments {
    s.chars().take(DIGITS).map(encode_char).collect()
}

/// Encode a value as four zero-padded hexadecimal digits
pub fn hex(value: u16) -> Segments {
    let mut text: String<8> = String::new();
    // 0xffff is four characters, the buffer cannot overflow
    let _ = write!(text, "{:04x}", value);
    encode_string(&text)
}

/// Encode a value as four zero-padded decimal digits
///
/// Values above 9999 do not fit; only their first four digits are kept.
pub fn number(value: u16) -> Segments {
    let mut text: String<8> = String::new();
    let _ = write!(text, "{:04}", value);
    encode_string(&text)
}
