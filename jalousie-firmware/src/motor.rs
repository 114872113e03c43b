//! GPIO stepper motor backend
//!
//! Drives a step/dir stepper driver (DRV8825-style power stage): enable is
//! active-low, sleep is active-high (high = awake). Pulse timing blocks the
//! control loop for the pulse period, which is what bounds the step rate.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

use jalousie_core::traits::motor::{Direction, MotorDriver};

/// Step/dir driver pins
pub struct GpioMotor<'d> {
    dir: Output<'d>,
    step: Output<'d>,
    /// Active-low enable
    enable: Output<'d>,
    /// Active-high sleep (high = awake)
    sleep: Output<'d>,
}

impl<'d> GpioMotor<'d> {
    /// Wrap the driver pins
    ///
    /// Pins must be initialized disabled (enable high) and asleep (sleep
    /// low) to match the stepper's power-on bookkeeping.
    pub fn new(dir: Output<'d>, step: Output<'d>, enable: Output<'d>, sleep: Output<'d>) -> Self {
        Self {
            dir,
            step,
            enable,
            sleep,
        }
    }
}

impl MotorDriver for GpioMotor<'_> {
    fn set_direction(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.dir.set_high(),
            Direction::Down => self.dir.set_low(),
        }
    }

    fn pulse(&mut self, width_us: u32) {
        self.step.set_high();
        block_for(Duration::from_micros(u64::from(width_us)));
        self.step.set_low();
        block_for(Duration::from_micros(u64::from(width_us)));
    }

    fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.enable.set_low();
        } else {
            self.enable.set_high();
        }
    }

    fn set_awake(&mut self, awake: bool) {
        if awake {
            self.sleep.set_high();
        } else {
            self.sleep.set_low();
        }
    }
}
