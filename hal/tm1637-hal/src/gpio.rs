//! Output line abstractions
//!
//! Provides the trait for the two digital lines that carry the TM1637 bus,
//! and an adapter for any `embedded-hal` output pin.

use embedded_hal::digital::{OutputPin, PinState};

/// Which of the two bus lines a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineId {
    /// CLK
    Clock,
    /// DIO
    Data,
}

/// Digital output line
///
/// Implementations handle the actual pin manipulation for the target.
/// Only two capabilities are required by the bus protocol: switching the
/// line into output mode and driving it to a level.
pub trait OutputLine {
    /// Error reported by the underlying pin
    type Error;

    /// Configure the line as a push-pull output
    fn configure_output(&mut self) -> Result<(), Self::Error>;

    /// Drive the line to the given level (`true` = logic 1)
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Set the line high (logic 1)
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(true)
    }

    /// Set the line low (logic 0)
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(false)
    }
}

/// Adapter from an `embedded-hal` output pin to [`OutputLine`]
///
/// A pin that implements `OutputPin` is already in output mode by type, so
/// `configure_output` does nothing here.
#[derive(Debug)]
pub struct HalOutput<P> {
    pin: P,
}

impl<P: OutputPin> HalOutput<P> {
    /// Wrap an output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputLine for HalOutput<P> {
    type Error = P::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        self.pin.set_state(PinState::from(high))
    }
}
