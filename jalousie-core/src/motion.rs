//! Stepper driver
//!
//! Issues single timed step pulses through the motor backend, enforces the
//! calibrated travel limits, and keeps the enable/sleep lines idempotent so
//! the idle manager and the step path never issue redundant pin writes.

use crate::state::ActuatorState;
use crate::traits::clock::Clock;
use crate::traits::cover::CoverHandle;
use crate::traits::motor::{Direction, MotorDriver};

/// Pulse width for calibration moves (slower, more torque margin)
pub const CALIBRATION_PULSE_US: u32 = 1600;

/// Pulse width for remote-controlled moves
pub const REMOTE_PULSE_US: u32 = 800;

/// Stepper driver with enable/sleep bookkeeping
pub struct Stepper<M: MotorDriver> {
    motor: M,
    enabled: bool,
    awake: bool,
}

impl<M: MotorDriver> Stepper<M> {
    /// Wrap a motor backend
    ///
    /// The backend must start with the power stage disabled and the driver
    /// asleep to match the initial bookkeeping.
    pub fn new(motor: M) -> Self {
        Self {
            motor,
            enabled: false,
            awake: false,
        }
    }

    /// Issue one step
    ///
    /// Without `ignore_limits` the step is refused - a no-op, not an error -
    /// when it would move above `max_pos` or below `min_pos`. A successful
    /// step wakes and enables the driver, advances `current_pos` by one raw
    /// step, records the move time, and pushes the new raw position to the
    /// cover collaborator.
    ///
    /// Returns whether a step was emitted.
    pub fn single_step(
        &mut self,
        state: &mut ActuatorState,
        cover: &mut impl CoverHandle,
        dir: Direction,
        ignore_limits: bool,
        pulse_us: u32,
        clock: &impl Clock,
    ) -> bool {
        if !ignore_limits {
            let blocked = match dir {
                Direction::Up => state.current_pos >= state.max_pos,
                Direction::Down => state.current_pos <= state.min_pos,
            };
            if blocked {
                return false;
            }
        }

        self.wake();
        self.enable();
        self.motor.set_direction(dir);
        self.motor.pulse(pulse_us);

        state.current_pos = match dir {
            Direction::Up => state.current_pos.saturating_add(1),
            Direction::Down => state.current_pos.saturating_sub(1),
        };
        state.mark_moved(clock.now_ms());
        cover.set_lift_raw(state.current_pos);

        true
    }

    /// Enable the power stage (no-op if already enabled)
    pub fn enable(&mut self) {
        if !self.enabled {
            self.motor.set_enabled(true);
            self.enabled = true;
        }
    }

    /// Disable the power stage (no-op if already disabled)
    pub fn disable(&mut self) {
        if self.enabled {
            self.motor.set_enabled(false);
            self.enabled = false;
        }
    }

    /// Wake the driver from low-power sleep (no-op if awake)
    pub fn wake(&mut self) {
        if !self.awake {
            self.motor.set_awake(true);
            self.awake = true;
        }
    }

    /// Put the driver into low-power sleep (no-op if asleep)
    pub fn sleep(&mut self) {
        if self.awake {
            self.motor.set_awake(false);
            self.awake = false;
        }
    }

    /// Whether the power stage is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the driver is electrically awake
    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Get the underlying backend
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Get the underlying backend mutably
    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }
}
