//! Button-driven boundary calibration
//!
//! In calibration mode a single button press jogs the motor a small batch of
//! steps with the travel limits ignored, so the operator can drive past a
//! previously committed boundary. Holding both buttons for the commit
//! threshold captures the current position as a boundary: first MIN, then
//! MAX, alternating on every commit. The operator may calibrate the two ends
//! in either physical order - if the MAX candidate lies below the saved MIN,
//! the two values swap so that `min_pos <= max_pos` always holds afterwards.

use crate::input::{Button, Buttons};
use crate::motion::{Stepper, CALIBRATION_PULSE_US};
use crate::state::ActuatorState;
use crate::traits::clock::Clock;
use crate::traits::cover::CoverHandle;
use crate::traits::leds::StatusLeds;
use crate::traits::motor::{Direction, MotorDriver};
use crate::traits::store::PositionStore;

/// Hold duration required to commit a boundary
pub const HOLD_COMMIT_MS: u64 = 3000;

/// Steps issued per jog press
pub const STEP_BATCH: u16 = 5;

/// Which boundary the next commit captures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationPhase {
    /// Next commit captures the lower boundary
    Min,
    /// Next commit captures the upper boundary
    Max,
}

/// Calibration state machine
///
/// Starts in the MIN phase on every power-on; the phase is never persisted,
/// only the committed positions are.
#[derive(Debug)]
pub struct Calibrator {
    phase: CalibrationPhase,
    /// Hold start timestamp (ms); zero means not counting
    hold_started_ms: u64,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calibrator {
    pub const fn new() -> Self {
        Self {
            phase: CalibrationPhase::Min,
            hold_started_ms: 0,
        }
    }

    /// Current calibration phase
    pub fn phase(&self) -> CalibrationPhase {
        self.phase
    }

    /// Whether a commit hold is currently counting
    pub fn hold_active(&self) -> bool {
        self.hold_started_ms != 0
    }

    /// Abandon an in-progress hold without committing
    ///
    /// Called when the mode switch leaves calibration mode.
    pub fn abort_hold(&mut self) {
        self.hold_started_ms = 0;
    }

    /// Run one calibration iteration
    pub fn service<M, S, C, L>(
        &mut self,
        state: &mut ActuatorState,
        stepper: &mut Stepper<M>,
        store: &mut S,
        cover: &mut C,
        leds: &mut L,
        buttons: &Buttons,
        clock: &impl Clock,
    ) where
        M: MotorDriver,
        S: PositionStore,
        C: CoverHandle,
        L: StatusLeds,
    {
        if buttons.both_pressed() {
            // The chord never doubles as a single-button jog
            let now = clock.now_ms();
            if self.hold_started_ms == 0 {
                self.hold_started_ms = now;
            } else if now - self.hold_started_ms >= HOLD_COMMIT_MS {
                self.commit(state, store, leds, clock);
                self.hold_started_ms = 0;
            }
            return;
        }

        // Releasing either button before the threshold drops the hold
        self.hold_started_ms = 0;

        if let Some(button) = buttons.single_pressed() {
            let dir = match button {
                Button::Up => Direction::Up,
                Button::Down => Direction::Down,
            };
            // Limits ignored: calibration may overtravel past old boundaries
            for _ in 0..STEP_BATCH {
                stepper.single_step(state, cover, dir, true, CALIBRATION_PULSE_US, clock);
            }
        }
    }

    /// Capture the current position as the phase's boundary and persist
    fn commit<S, L>(&mut self, state: &mut ActuatorState, store: &mut S, leds: &mut L, clock: &impl Clock)
    where
        S: PositionStore,
        L: StatusLeds,
    {
        match self.phase {
            CalibrationPhase::Min => {
                state.min_pos = state.current_pos;
                self.phase = CalibrationPhase::Max;
            }
            CalibrationPhase::Max => {
                // Pairwise swap against the saved MIN only: the operator may
                // have calibrated the physical ends in either order.
                if state.current_pos < state.min_pos {
                    state.max_pos = state.min_pos;
                    state.min_pos = state.current_pos;
                } else {
                    state.max_pos = state.current_pos;
                }
                self.phase = CalibrationPhase::Min;
            }
        }

        // A failed write costs only this save cycle; the boundaries stay
        // committed in memory.
        if store.save(&state.record()).is_ok() {
            state.mark_saved(clock.now_ms());
        }
        leds.acknowledge();
    }
}
