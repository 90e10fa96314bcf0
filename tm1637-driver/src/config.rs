//! Startup configuration
//!
//! The TM1637 keeps no settings across power cycles, so everything here is
//! applied again each time a [`Tm1637`](crate::Tm1637) is constructed.
//!
//! With the `toml` feature a configuration can be read from a TOML table:
//!
//! ```toml
//! brightness = 3
//! display_on = true
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Brightness used when nothing else is configured
pub const DEFAULT_BRIGHTNESS: u8 = 7;

/// Highest brightness level (14/16 pulse width)
pub const MAX_BRIGHTNESS: u8 = 7;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    Parse,
    /// Brightness above [`MAX_BRIGHTNESS`]
    BrightnessOutOfRange(u8),
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tm1637Config {
    /// Startup brightness (0-7)
    pub brightness: u8,
    /// Whether the LEDs are lit after construction
    pub display_on: bool,
}

impl Default for Tm1637Config {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            display_on: true,
        }
    }
}

impl Tm1637Config {
    /// Set the startup brightness
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set whether the display starts lit
    pub fn with_display_on(mut self, display_on: bool) -> Self {
        self.display_on = display_on;
        self
    }

    /// Check that all values are within device limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange(self.brightness));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML
    ///
    /// Missing keys fall back to their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
