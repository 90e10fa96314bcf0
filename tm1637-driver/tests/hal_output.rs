//! Driving the display through the embedded-hal adapter.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use tm1637_driver::{HalOutput, Tm1637, Tm1637Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// embedded-hal pin logging its level changes into a shared trace
struct TracePin {
    name: char,
    trace: Rc<RefCell<Vec<(char, bool)>>>,
    fail: bool,
}

impl ErrorType for TracePin {
    type Error = PinFault;
}

impl OutputPin for TracePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(PinFault);
        }
        self.trace.borrow_mut().push((self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(PinFault);
        }
        self.trace.borrow_mut().push((self.name, true));
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn pins(fail_data: bool) -> (HalOutput<TracePin>, HalOutput<TracePin>, Rc<RefCell<Vec<(char, bool)>>>) {
    let trace = Rc::new(RefCell::new(Vec::new()));
    let clk = TracePin {
        name: 'c',
        trace: trace.clone(),
        fail: false,
    };
    let dio = TracePin {
        name: 'd',
        trace: trace.clone(),
        fail: fail_data,
    };
    (HalOutput::new(clk), HalOutput::new(dio), trace)
}

#[test]
fn construction_drives_clock_then_data_low() {
    let (clk, dio, trace) = pins(false);

    let _display = Tm1637::with_default_config(clk, dio, NoDelay).unwrap();

    let trace = trace.borrow();
    assert_eq!(&trace[..2], &[('c', false), ('d', false)]);
}

#[test]
fn pin_errors_are_returned() {
    let (clk, dio, _trace) = pins(true);

    let result = Tm1637::with_default_config(clk, dio, NoDelay);

    assert!(matches!(result, Err(Tm1637Error::Line(PinFault))));
}

#[test]
fn release_gives_back_pins() {
    let (clk, dio, _trace) = pins(false);
    let display = Tm1637::with_default_config(clk, dio, NoDelay).unwrap();

    let (clk, dio, _delay) = display.release();

    assert_eq!(clk.into_inner().name, 'c');
    assert_eq!(dio.into_inner().name, 'd');
}
