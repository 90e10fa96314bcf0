//! Seven-segment encoding for TM1637 displays
//!
//! Pure lookup from digits and characters to segment bit patterns. Nothing
//! here touches hardware, so every function is safe to call from anywhere.
//!
//! # Segment layout
//!
//! ```text
//!      A
//!     ---
//!  F |   | B
//!     -G-
//!  E |   | C
//!     ---   .
//!      D    DP
//! ```
//!
//! Bit 0 is segment A through bit 6 for segment G. Bit 7 drives the decimal
//! point or, on digit 1 of clock-style modules, the colon.

#![no_std]
#![deny(unsafe_code)]

pub mod encode;
pub mod table;

pub use encode::{
    encode_char, encode_digit, encode_string, hex, number, try_encode_char, Segments, DIGITS,
};
pub use table::{BLANK, DASH, DOT, STAR};
