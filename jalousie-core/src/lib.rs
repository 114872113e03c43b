//! Board-agnostic core logic for the Jalousie window-blind actuator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (motor, store, cover attributes, LEDs, clock)
//! - Debounced button input
//! - Stepper driver bookkeeping and travel-limit handling
//! - Button-driven boundary calibration
//! - Remote-controlled position tracking
//! - Idle power management and persistence cadence

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod calibration;
pub mod indicator;
pub mod input;
pub mod motion;
pub mod power;
pub mod record;
pub mod remote;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testutil;
