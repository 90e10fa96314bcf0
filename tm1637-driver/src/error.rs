//! Error and diagnostic types

use core::fmt;

/// Errors returned by display operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1637Error<E> {
    /// A CLK or DIO line could not be driven
    Line(E),
    /// Start position outside 0-4; nothing was sent
    PositionOutOfRange(i32),
    /// More segment bytes than display registers; nothing was sent
    TooManySegments(usize),
}

impl<E: fmt::Debug> fmt::Display for Tm1637Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(e) => write!(f, "line error: {e:?}"),
            Self::PositionOutOfRange(pos) => write!(f, "position out of range: {pos}"),
            Self::TooManySegments(len) => write!(f, "too many segments: {len}"),
        }
    }
}

/// Non-fatal conditions noticed while serving a request
///
/// These are logged as they happen, and the most recent one is kept by the
/// controller for callers that want to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Brightness above 7; the low 3 bits were applied
    BrightnessOutOfRange(u8),
    /// Write position outside 0-4; the write was dropped
    PositionOutOfRange(i32),
    /// Character without a glyph; shown blank
    UnknownChar(char),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrightnessOutOfRange(level) => write!(f, "brightness {level} out of range"),
            Self::PositionOutOfRange(pos) => write!(f, "position {pos} out of range"),
            Self::UnknownChar(c) => write!(f, "character {c:?} out of range"),
        }
    }
}
