//! TM1637 display controller
//!
//! Turns the bus primitives into device operations. The controller keeps the
//! brightness and on/off state and re-sends them with every display-control
//! command, since the TM1637 cannot be queried.
//!
//! Out-of-range input is handled in two ways:
//!
//! - brightness above 7 is masked to 3 bits and still applied
//! - a write position outside 0-4 drops the write before any bus activity
//!
//! Both are logged and recorded as a [`Diagnostic`].

use heapless::String;
use tm1637_hal::{DelayNs, OutputLine};
use tm1637_segments::{hex, number, try_encode_char, Segments, BLANK, DIGITS, DOT};

use crate::bus::{cmd, Bus, MAX_REGISTERS};
use crate::config::{Tm1637Config, MAX_BRIGHTNESS};
use crate::error::{Diagnostic, Tm1637Error};

/// Highest start position accepted by [`Tm1637::write`]
pub const MAX_POSITION: i32 = 4;

/// Scroll step used by [`Tm1637::scroll`]
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 250;

/// Room for four characters of up to four UTF-8 bytes each
const WINDOW_BYTES: usize = 4 * DIGITS;

/// TM1637 display
///
/// One instance per physical display. All operations block until their bus
/// transactions are complete.
pub struct Tm1637<CLK, DIO, D> {
    bus: Bus<CLK, DIO, D>,
    brightness: u8,
    display_on: bool,
    diagnostic: Option<Diagnostic>,
}

impl<CLK, DIO, D, E> Tm1637<CLK, DIO, D>
where
    CLK: OutputLine<Error = E>,
    DIO: OutputLine<Error = E>,
    D: DelayNs,
{
    /// Take the lines, reset them and bring the display up
    ///
    /// Both lines are driven low, then the data command and display control
    /// are sent so the device is in auto-increment mode and lit at the
    /// configured brightness.
    pub fn new(clk: CLK, dio: DIO, delay: D, config: Tm1637Config) -> Result<Self, Tm1637Error<E>> {
        info!(
            "init with brightness: {} display_on: {}",
            config.brightness,
            config.display_on
        );

        let mut display = Self {
            bus: Bus::new(clk, dio, delay),
            brightness: 0,
            display_on: config.display_on,
            diagnostic: None,
        };
        display.brightness = display.checked_brightness(config.brightness);

        display.bus.init().map_err(Tm1637Error::Line)?;
        display.write_data_cmd()?;
        display.write_display_control()?;
        Ok(display)
    }

    /// Same as [`new`](Self::new) with [`Tm1637Config::default`]
    pub fn with_default_config(clk: CLK, dio: DIO, delay: D) -> Result<Self, Tm1637Error<E>> {
        Self::new(clk, dio, delay, Tm1637Config::default())
    }

    /// Current brightness (0-7)
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness and apply it immediately
    ///
    /// 0 is 1/16 pulse width, 7 is 14/16. Values above 7 are reported and
    /// masked to their low 3 bits.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Tm1637Error<E>> {
        self.brightness = self.checked_brightness(level);
        self.write_data_cmd()?;
        self.write_display_control()
    }

    /// Whether the LEDs are switched on
    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    /// Switch the LEDs on or off without touching the digit registers
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Tm1637Error<E>> {
        self.display_on = on;
        self.write_data_cmd()?;
        self.write_display_control()
    }

    /// Write segment bytes starting at `pos`
    ///
    /// Up to six bytes moving right from `pos`. On modules with a colon, the
    /// MSB of the byte at position 1 drives it.
    pub fn write(&mut self, segments: &[u8], pos: i32) -> Result<(), Tm1637Error<E>> {
        if !(0..=MAX_POSITION).contains(&pos) {
            error!("Position out of range: {}", pos);
            self.report(Diagnostic::PositionOutOfRange(pos));
            return Err(Tm1637Error::PositionOutOfRange(pos));
        }
        if segments.len() > MAX_REGISTERS {
            error!("Too many segments: {}", segments.len());
            return Err(Tm1637Error::TooManySegments(segments.len()));
        }

        self.write_data_cmd()?;

        // pos is 0-4 here
        let address = cmd::ADDRESS | pos as u8;
        self.bus.start().map_err(Tm1637Error::Line)?;
        self.bus.write_byte(address).map_err(Tm1637Error::Line)?;
        for &segment in segments {
            self.bus.write_byte(segment).map_err(Tm1637Error::Line)?;
        }
        self.bus.stop().map_err(Tm1637Error::Line)?;

        self.write_display_control()
    }

    /// Show up to four characters from position 0
    ///
    /// With `colon` set and at least two characters, the colon between the
    /// second and third digit is lit.
    pub fn show(&mut self, text: &str, colon: bool) -> Result<(), Tm1637Error<E>> {
        let mut segments = self.encode_text(text);
        if colon {
            if let Some(second) = segments.get_mut(1) {
                *second |= DOT;
            }
        }
        self.write(&segments, 0)
    }

    /// Show a value as four zero-padded decimal digits
    pub fn show_number(&mut self, value: u16) -> Result<(), Tm1637Error<E>> {
        self.write(&number(value), 0)
    }

    /// Show a value as four zero-padded hexadecimal digits
    pub fn show_hex(&mut self, value: u16) -> Result<(), Tm1637Error<E>> {
        self.write(&hex(value), 0)
    }

    /// Blank all four digits
    pub fn clear(&mut self) -> Result<(), Tm1637Error<E>> {
        self.write(&[BLANK; DIGITS], 0)
    }

    /// Write one raw segment byte using fixed addressing
    ///
    /// `pos` is sent as-is; the device decides what an invalid address does.
    pub fn set_raw(&mut self, pos: u8, data: u8) -> Result<(), Tm1637Error<E>> {
        debug!("set_raw pos: {} data: {=u8:#x}", pos, data);
        self.bus
            .command(cmd::DATA_FIXED_ADDRESS)
            .map_err(Tm1637Error::Line)?;
        self.bus
            .transaction(&[cmd::ADDRESS | pos, data])
            .map_err(Tm1637Error::Line)?;
        let control = self.display_control_byte();
        self.bus.command(control).map_err(Tm1637Error::Line)
    }

    /// Write one character at `pos`, optionally with its dot lit
    pub fn set_char(&mut self, pos: u8, ch: char, dot: bool) -> Result<(), Tm1637Error<E>> {
        let mut data = self.encode(ch);
        if dot {
            data |= DOT;
        }
        self.set_raw(pos, data)
    }

    /// Scroll text in from the right with [`DEFAULT_SCROLL_DELAY_MS`] per step
    pub fn scroll(&mut self, text: &str) -> Result<(), Tm1637Error<E>> {
        self.scroll_with_delay(text, DEFAULT_SCROLL_DELAY_MS)
    }

    /// Scroll text in from the right
    ///
    /// Starts from a blank window; for every character waits `delay_ms`,
    /// shifts the window one digit left and shows it. Blocks for the whole
    /// animation.
    pub fn scroll_with_delay(&mut self, text: &str, delay_ms: u32) -> Result<(), Tm1637Error<E>> {
        let mut window = [' '; DIGITS];
        for c in text.chars() {
            self.bus.delay_ms(delay_ms);
            window.rotate_left(1);
            window[DIGITS - 1] = c;

            let shown: String<WINDOW_BYTES> = window.iter().collect();
            self.show(&shown, false)?;
        }
        Ok(())
    }

    /// Most recent diagnostic, if any
    pub fn last_diagnostic(&self) -> Option<Diagnostic> {
        self.diagnostic
    }

    /// Most recent diagnostic, clearing it
    pub fn take_diagnostic(&mut self) -> Option<Diagnostic> {
        self.diagnostic.take()
    }

    /// Give back the lines and the delay
    ///
    /// The display keeps showing whatever was last written.
    pub fn release(self) -> (CLK, DIO, D) {
        self.bus.release()
    }

    fn checked_brightness(&mut self, level: u8) -> u8 {
        if level > MAX_BRIGHTNESS {
            warn!("brightness: {} out of range.", level);
            self.report(Diagnostic::BrightnessOutOfRange(level));
        }
        level & cmd::BRIGHTNESS_MASK
    }

    fn display_control_byte(&self) -> u8 {
        let on = if self.display_on { cmd::DISPLAY_ON } else { 0 };
        cmd::DISPLAY_CONTROL | on | self.brightness
    }

    fn write_data_cmd(&mut self) -> Result<(), Tm1637Error<E>> {
        self.bus
            .command(cmd::DATA_AUTO_INCREMENT)
            .map_err(Tm1637Error::Line)
    }

    fn write_display_control(&mut self) -> Result<(), Tm1637Error<E>> {
        let control = self.display_control_byte();
        debug!("display control: {=u8:#x}", control);
        self.bus.command(control).map_err(Tm1637Error::Line)
    }

    fn encode_text(&mut self, text: &str) -> Segments {
        text.chars().take(DIGITS).map(|c| self.encode(c)).collect()
    }

    fn encode(&mut self, c: char) -> u8 {
        match try_encode_char(c) {
            Some(segments) => segments,
            None => {
                error!("Character out of range: {}", c);
                self.report(Diagnostic::UnknownChar(c));
                BLANK
            }
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostic = Some(diagnostic);
    }
}
