//! TM1637 seven-segment display driver
//!
//! Drives a TM1637 LED controller over its two-wire CLK/DIO bus by toggling
//! plain output lines. Every call blocks until the whole bus transaction has
//! been clocked out; there is no background work and no locking, so one
//! owner must issue all commands.
//!
//! - [`bus`] - START/STOP/byte waveforms with fixed bit timing
//! - [`display`] - brightness, raw writes, text, scrolling
//! - [`config`] - startup configuration
//!
//! Character encoding lives in [`tm1637_segments`] and is re-exported here.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod bus;
pub mod config;
pub mod display;
pub mod error;

pub use bus::{cmd, Bus, BIT_DELAY_US, MAX_REGISTERS};
pub use config::{ConfigError, Tm1637Config, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
pub use display::{Tm1637, DEFAULT_SCROLL_DELAY_MS, MAX_POSITION};
pub use error::{Diagnostic, Tm1637Error};
pub use tm1637_hal::{DelayNs, HalOutput, OutputLine};
pub use tm1637_segments as segments;
