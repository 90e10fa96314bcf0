//! Simulated bus for host testing
//!
//! `SimBus` records every line change and delay issued through the lines and
//! delay it hands out, and decodes the recorded waveform the way a TM1637
//! samples it:
//!
//! - START: DIO falls while CLK is high
//! - STOP: DIO rises while CLK is high
//! - each CLK rising edge samples one bit, LSB first
//! - the 9th edge of a byte is the ACK slot and is not part of the data
//!
//! Lines start high, as on the common breakout boards with pull-ups.

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::gpio::{LineId, OutputLine};

/// Clock edges per transmitted byte (8 data bits + ACK)
const EDGES_PER_BYTE: u8 = 9;

/// A single recorded bus event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// Line switched to output mode
    Configured(LineId),
    /// Line driven to a level (`true` = high)
    Level(LineId, bool),
    /// Delay in nanoseconds
    Delay(u32),
}

/// Shared recorder for one simulated TM1637 bus
#[derive(Debug, Clone, Default)]
pub struct SimBus {
    events: Rc<RefCell<Vec<BusEvent>>>,
}

impl SimBus {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Line handle for CLK
    pub fn clock(&self) -> SimLine {
        SimLine {
            id: LineId::Clock,
            bus: self.clone(),
        }
    }

    /// Line handle for DIO
    pub fn data(&self) -> SimLine {
        SimLine {
            id: LineId::Data,
            bus: self.clone(),
        }
    }

    /// Delay handle that records instead of sleeping
    pub fn delay(&self) -> SimDelay {
        SimDelay { bus: self.clone() }
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<BusEvent> {
        self.events.borrow().clone()
    }

    /// Forget everything recorded so far
    ///
    /// Line levels are tracked from the recorded events, so clearing also
    /// resets both lines to their idle-high state as far as decoding goes.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Total simulated time spent in delays
    pub fn elapsed_ns(&self) -> u64 {
        self.events
            .borrow()
            .iter()
            .map(|event| match event {
                BusEvent::Delay(ns) => u64::from(*ns),
                _ => 0,
            })
            .sum()
    }

    /// Number of START conditions seen on the bus
    pub fn start_conditions(&self) -> usize {
        let mut decoder = Decoder::new();
        let mut starts = 0;
        for event in self.events.borrow().iter() {
            if decoder.feed(*event) == Some(Condition::Start) {
                starts += 1;
            }
        }
        starts
    }

    /// Decode the recorded waveform into transactions
    ///
    /// Each returned frame holds the bytes written between the beginning of a
    /// transaction and its STOP condition.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let mut decoder = Decoder::new();
        for event in self.events.borrow().iter() {
            decoder.feed(*event);
        }
        decoder.frames
    }

    fn record(&self, event: BusEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// One simulated bus line
#[derive(Debug, Clone)]
pub struct SimLine {
    id: LineId,
    bus: SimBus,
}

impl SimLine {
    /// Which line this handle drives
    pub fn id(&self) -> LineId {
        self.id
    }
}

impl OutputLine for SimLine {
    type Error = Infallible;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        self.bus.record(BusEvent::Configured(self.id));
        Ok(())
    }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        self.bus.record(BusEvent::Level(self.id, high));
        Ok(())
    }
}

/// Zero-cost delay that only records the requested duration
#[derive(Debug, Clone)]
pub struct SimDelay {
    bus: SimBus,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.bus.record(BusEvent::Delay(ns));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Start,
    Stop,
}

/// Device-side view of the waveform
struct Decoder {
    clk: bool,
    dio: bool,
    byte: u8,
    edges: u8,
    frame: Vec<u8>,
    frames: Vec<Vec<u8>>,
}

impl Decoder {
    fn new() -> Self {
        Self {
            clk: true,
            dio: true,
            byte: 0,
            edges: 0,
            frame: Vec::new(),
            frames: Vec::new(),
        }
    }

    fn feed(&mut self, event: BusEvent) -> Option<Condition> {
        let BusEvent::Level(line, high) = event else {
            return None;
        };

        match line {
            LineId::Clock => {
                if high && !self.clk {
                    self.sample();
                }
                self.clk = high;
                None
            }
            LineId::Data => {
                let condition = if self.clk && self.dio && !high {
                    Some(Condition::Start)
                } else if self.clk && !self.dio && high {
                    Some(Condition::Stop)
                } else {
                    None
                };
                self.dio = high;

                match condition {
                    Some(Condition::Start) => {
                        self.frame.clear();
                        self.reset_bits();
                    }
                    Some(Condition::Stop) => {
                        if !self.frame.is_empty() {
                            self.frames.push(core::mem::take(&mut self.frame));
                        }
                        self.reset_bits();
                    }
                    None => {}
                }
                condition
            }
        }
    }

    fn sample(&mut self) {
        if self.edges < 8 && self.dio {
            self.byte |= 1 << self.edges;
        }
        self.edges += 1;
        if self.edges == EDGES_PER_BYTE {
            self.frame.push(self.byte);
            self.reset_bits();
        }
    }

    fn reset_bits(&mut self) {
        self.byte = 0;
        self.edges = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    fn clock_in(clk: &mut SimLine, dio: &mut SimLine, byte: u8) {
        for i in 0..8 {
            dio.set_level((byte >> i) & 1 == 1).unwrap();
            clk.set_high().unwrap();
            clk.set_low().unwrap();
        }
        // ACK slot
        clk.set_high().unwrap();
        clk.set_low().unwrap();
    }

    #[test]
    fn test_decodes_framed_bytes() {
        let bus = SimBus::new();
        let mut clk = bus.clock();
        let mut dio = bus.data();

        // START
        dio.set_low().unwrap();
        clk.set_low().unwrap();
        clock_in(&mut clk, &mut dio, 0xC0);
        clock_in(&mut clk, &mut dio, 0x3F);
        // STOP
        dio.set_low().unwrap();
        clk.set_high().unwrap();
        dio.set_high().unwrap();

        assert_eq!(bus.frames(), vec![vec![0xC0, 0x3F]]);
        assert_eq!(bus.start_conditions(), 1);
    }

    #[test]
    fn test_data_change_with_clock_low_is_not_a_start() {
        let bus = SimBus::new();
        let mut clk = bus.clock();
        let mut dio = bus.data();

        clk.set_low().unwrap();
        dio.set_low().unwrap();

        assert_eq!(bus.start_conditions(), 0);
        assert!(bus.frames().is_empty());
    }

    #[test]
    fn test_delay_is_recorded_not_slept() {
        let bus = SimBus::new();
        let mut delay = bus.delay();

        delay.delay_us(10);
        delay.delay_ms(250);

        assert_eq!(bus.elapsed_ns(), 10_000 + 250_000_000);
    }

    #[test]
    fn test_configure_is_recorded() {
        let bus = SimBus::new();
        let mut dio = bus.data();

        dio.configure_output().unwrap();

        assert_eq!(bus.events(), vec![BusEvent::Configured(LineId::Data)]);
        bus.clear();
        assert!(bus.events().is_empty());
    }
}
