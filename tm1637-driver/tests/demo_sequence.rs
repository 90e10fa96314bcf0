//! The demonstration routine shipped with the board, run against the
//! simulated bus: brightness sweep, raw segment chase, clock readout with
//! blinking colon, hex digits and a scrolling message.

use tm1637_driver::segments::{encode_char, number};
use tm1637_driver::{Tm1637, Tm1637Config};
use tm1637_hal::sim::SimBus;

const CHASE: [u8; 6] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20];

#[test]
fn demo_runs_to_completion() {
    let sim = SimBus::new();
    let mut display = Tm1637::new(
        sim.clock(),
        sim.data(),
        sim.delay(),
        Tm1637Config::default(),
    )
    .unwrap();

    // Brightness sweep
    for level in 0..7 {
        display.set_brightness(level).unwrap();
        display.show("8888", false).unwrap();
    }
    assert_eq!(display.brightness(), 6);

    // Segment chase on all four digits
    for step in 0..32 {
        let data = CHASE[step % CHASE.len()];
        for pos in 0..4 {
            display.set_raw(pos, data).unwrap();
        }
    }

    // Clock readout, 12:34 with the dots blinking
    let time = number(1234);
    assert_eq!(time.as_slice(), &[0x06, 0x5B, 0x4F, 0x66]);
    for blink in 0..5 {
        for (pos, c) in "1234".chars().enumerate() {
            display.set_char(pos as u8, c, blink % 2 == 1).unwrap();
        }
    }

    // Hex digits
    for x in 0..16u32 {
        let c = char::from_digit(x, 16).unwrap();
        for pos in 0..4 {
            display.set_char(pos, c, x % 2 == 1).unwrap();
        }
    }

    display
        .scroll_with_delay("    getting the tm1637 to work", 1)
        .unwrap();

    assert_eq!(display.last_diagnostic(), None);

    // Last write shows the tail of the message
    let last_write = sim
        .frames()
        .into_iter()
        .filter(|f| f.len() == 5 && f[0] == 0xC0)
        .last()
        .unwrap();
    let expected: Vec<u8> = "work".chars().map(encode_char).collect();
    assert_eq!(&last_write[1..], expected.as_slice());
}

#[test]
fn clock_readout_blinks_dot() {
    let sim = SimBus::new();
    let mut display = Tm1637::with_default_config(sim.clock(), sim.data(), sim.delay()).unwrap();
    sim.clear();

    display.set_char(1, '2', true).unwrap();
    display.set_char(1, '2', false).unwrap();

    let frames = sim.frames();
    assert_eq!(frames[1], vec![0xC1, 0x5B | 0x80]);
    assert_eq!(frames[4], vec![0xC1, 0x5B]);
}
