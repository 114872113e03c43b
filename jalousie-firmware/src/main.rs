//! Jalousie - Motorized Window-Blind Actuator Firmware
//!
//! Main firmware binary for RP2040-based blind controllers. Brings up the
//! GPIO bindings, the flash-backed position store, and the single
//! cooperative control task.
//!
//! The wireless protocol stack (pairing, attribute transport) is an external
//! collaborator: its attribute surface is modeled by the statics in
//! `channels`, which the stack side reads and writes.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use crate::control::control_task;
use crate::flash::FlashStore;
use crate::leds::BoardLeds;
use crate::motor::GpioMotor;

mod channels;
mod control;
mod cover;
mod flash;
mod leds;
mod motor;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Jalousie firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Stepper driver pins (DRV8825-style): enable is active-low, sleep is
    // active-high. Power-on state: disabled and asleep, matching the
    // stepper's bookkeeping.
    let motor = GpioMotor::new(
        Output::new(p.PIN_10, Level::Low),  // DIR
        Output::new(p.PIN_11, Level::Low),  // STEP
        Output::new(p.PIN_12, Level::High), // /ENABLE (high = disabled)
        Output::new(p.PIN_13, Level::Low),  // SLEEP (low = asleep)
    );

    let leds = BoardLeds::new(
        Output::new(p.PIN_14, Level::Low), // MIN-phase indicator
        Output::new(p.PIN_15, Level::Low), // MAX-phase indicator
    );

    // Momentary buttons and the mode switch are wired to ground, so a low
    // level means pressed / calibration selected.
    let up = Input::new(p.PIN_2, Pull::Up);
    let down = Input::new(p.PIN_3, Pull::Up);
    let mode_switch = Input::new(p.PIN_4, Pull::Up);

    let store = FlashStore::new(p.FLASH, p.DMA_CH0);

    unwrap!(spawner.spawn(control_task(store, motor, leds, up, down, mode_switch)));
}
