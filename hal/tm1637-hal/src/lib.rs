//! TM1637 Hardware Abstraction Layer
//!
//! The TM1637 has no bus peripheral of its own: it is driven by toggling two
//! plain digital outputs (CLK and DIO). This crate defines the minimal
//! capability the driver needs from those lines, so the same protocol code
//! runs on a microcontroller or against a simulated line recorder.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tm1637-driver (bus + display control)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tm1637-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  sim::SimBus  │
//! │  OutputPin    │       │  (host tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputLine`] - Set line level / configure as output
//! - [`embedded_hal::delay::DelayNs`] - Bit timing and scroll delays

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod gpio;
#[cfg(any(test, feature = "std"))]
pub mod sim;

// Re-export key traits at crate root for convenience
pub use embedded_hal::delay::DelayNs;
pub use gpio::{HalOutput, LineId, OutputLine};
