//! TM1637 two-wire bus
//!
//! The TM1637 talks an I2C-like protocol with no device address and LSB-first
//! bytes. The controller has no clock source of its own, so every line change
//! is followed by the same fixed delay to give it time to sample.
//!
//! # Waveforms
//!
//! - START: DIO low, then CLK low
//! - byte: for each bit (LSB first) set DIO, pulse CLK; then one extra CLK
//!   pulse for the ACK slot
//! - STOP: DIO low, CLK high, then DIO high
//!
//! The ACK driven by the display is not read back: the bus is write-only.

use tm1637_hal::{DelayNs, OutputLine};

/// TM1637 command bytes
pub mod cmd {
    /// Data command, auto-increment addressing
    pub const DATA_AUTO_INCREMENT: u8 = 0x40;
    /// Data command, fixed addressing
    pub const DATA_FIXED_ADDRESS: u8 = 0x44;
    /// Address command base (OR with register 0-5)
    pub const ADDRESS: u8 = 0xC0;
    /// Display control base
    pub const DISPLAY_CONTROL: u8 = 0x80;
    /// Display control: LEDs on
    pub const DISPLAY_ON: u8 = 0x08;
    /// Display control: brightness bits
    pub const BRIGHTNESS_MASK: u8 = 0x07;
}

/// Delay after every line transition, in microseconds
pub const BIT_DELAY_US: u32 = 10;

/// Number of display registers (digit positions) on the controller
pub const MAX_REGISTERS: usize = 6;

/// Bit-banged bus over two output lines
///
/// Owns both lines and the delay for as long as it lives.
pub struct Bus<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
}

impl<CLK, DIO, D, E> Bus<CLK, DIO, D>
where
    CLK: OutputLine<Error = E>,
    DIO: OutputLine<Error = E>,
    D: DelayNs,
{
    /// Take ownership of the lines; nothing is driven yet
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self { clk, dio, delay }
    }

    /// Switch both lines to outputs and drive them low
    ///
    /// CLK goes low before DIO so that pulling DIO down cannot be mistaken
    /// for a START condition.
    pub fn init(&mut self) -> Result<(), E> {
        self.clk.configure_output()?;
        self.clk.set_low()?;
        self.dio.configure_output()?;
        self.dio.set_low()?;
        self.bit_delay();
        Ok(())
    }

    /// Begin a transaction
    pub fn start(&mut self) -> Result<(), E> {
        self.dio.set_low()?;
        self.bit_delay();
        self.clk.set_low()?;
        self.bit_delay();
        Ok(())
    }

    /// End a transaction
    pub fn stop(&mut self) -> Result<(), E> {
        self.dio.set_low()?;
        self.bit_delay();
        self.clk.set_high()?;
        self.bit_delay();
        self.dio.set_high()?;
        self.bit_delay();
        Ok(())
    }

    /// Clock out one byte, LSB first, followed by the ACK slot
    pub fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        for i in 0..8 {
            self.dio.set_level((byte >> i) & 1 == 1)?;
            self.bit_delay();
            self.clk.set_high()?;
            self.bit_delay();
            self.clk.set_low()?;
            self.bit_delay();
        }

        // ACK: the display pulls DIO low during this pulse
        self.clk.set_low()?;
        self.bit_delay();
        self.clk.set_high()?;
        self.bit_delay();
        self.clk.set_low()?;
        self.bit_delay();
        Ok(())
    }

    /// START, the given bytes, STOP
    pub fn transaction(&mut self, bytes: &[u8]) -> Result<(), E> {
        self.start()?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        self.stop()
    }

    /// Send a single-byte command in its own transaction
    pub fn command(&mut self, command: u8) -> Result<(), E> {
        self.transaction(&[command])
    }

    /// Block for the given number of milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the lines and the delay
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }
}
