//! Remote-controlled position tracking
//!
//! In remote mode the controller polls the requested lift position from the
//! cover collaborator once per loop iteration. A request that matches the
//! last handled one is a no-op, so the motor is never re-driven toward a
//! target it already reached. A new request maps the requested percentage
//! into the calibrated range and steps to it in a blocking loop: the move
//! runs to completion before the control loop continues, so button and
//! mode-switch changes are not observed mid-move. There is no cancellation
//! and no timeout; motion duration is bounded by the remaining step count.

use crate::motion::{Stepper, REMOTE_PULSE_US};
use crate::state::ActuatorState;
use crate::traits::clock::Clock;
use crate::traits::cover::{CoverHandle, Operation};
use crate::traits::motor::{Direction, MotorDriver};

/// Drives the motor to remotely requested positions
#[derive(Debug)]
pub struct PositionController {
    /// Raw value of the last handled request
    last_handled_raw: Option<u16>,
}

impl Default for PositionController {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionController {
    pub const fn new() -> Self {
        Self {
            last_handled_raw: None,
        }
    }

    /// Treat `raw` as already handled
    ///
    /// Used at boot so the requested value seeded from the persisted
    /// position does not command a move.
    pub fn mark_handled(&mut self, raw: u16) {
        self.last_handled_raw = Some(raw);
    }

    /// Run one remote-mode iteration
    pub fn service<M, C>(
        &mut self,
        state: &mut ActuatorState,
        stepper: &mut Stepper<M>,
        cover: &mut C,
        clock: &impl Clock,
    ) where
        M: MotorDriver,
        C: CoverHandle,
    {
        let requested_raw = cover.requested_lift_raw();
        if self.last_handled_raw == Some(requested_raw) {
            return;
        }
        self.last_handled_raw = Some(requested_raw);

        let target = state.raw_for_percent(cover.requested_lift_percent());

        let (dir, operation) = if target > state.current_pos {
            (Direction::Up, Operation::Opening)
        } else {
            (Direction::Down, Operation::Closing)
        };
        cover.set_operation(operation);

        // Per-step limit checks are skipped: the target itself is already
        // bounded by the percent remap.
        while state.current_pos != target {
            stepper.single_step(state, cover, dir, true, REMOTE_PULSE_US, clock);
            cover.set_lift_percent(state.percent());
        }

        cover.set_operation(Operation::Stopped);
        cover.set_lift_raw(state.current_pos);
        cover.set_lift_percent(state.percent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PositionRecord;
    use crate::testutil::{MockClock, MockCover, MockMotor};

    fn default_state() -> ActuatorState {
        ActuatorState::from_record(PositionRecord::defaults())
    }

    #[test]
    fn test_drive_to_requested_percent() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 750,
            requested_percent: 75,
            ..Default::default()
        };
        let mut controller = PositionController::new();

        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        // 500 -> 750: 250 steps opening
        assert_eq!(state.current_pos, 750);
        assert_eq!(stepper.motor().pulses, 250);
        assert_eq!(stepper.motor().direction, Some(Direction::Up));
        assert_eq!(stepper.motor().last_pulse_us, REMOTE_PULSE_US);
        assert_eq!(cover.operations.as_slice(), [Operation::Opening, Operation::Stopped]);
        assert_eq!(cover.lift_raw, Some(750));
        assert_eq!(cover.lift_percent, Some(75));
    }

    #[test]
    fn test_same_request_is_idempotent() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 750,
            requested_percent: 75,
            ..Default::default()
        };
        let mut controller = PositionController::new();

        controller.service(&mut state, &mut stepper, &mut cover, &clock);
        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        // The second identical request performs no motion
        assert_eq!(stepper.motor().pulses, 250);
        assert_eq!(cover.operations.len(), 2);
    }

    #[test]
    fn test_closing_move() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 250,
            requested_percent: 25,
            ..Default::default()
        };
        let mut controller = PositionController::new();

        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        assert_eq!(state.current_pos, 250);
        assert_eq!(stepper.motor().direction, Some(Direction::Down));
        assert_eq!(cover.operations.as_slice(), [Operation::Closing, Operation::Stopped]);
    }

    #[test]
    fn test_target_equal_to_current_terminates_immediately() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 123,
            requested_percent: 50, // maps exactly onto the current position
            ..Default::default()
        };
        let mut controller = PositionController::new();

        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        assert_eq!(stepper.motor().pulses, 0);
        assert_eq!(state.current_pos, 500);
    }

    #[test]
    fn test_overrange_percent_clamps_to_full_open() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 2000,
            requested_percent: 150,
            ..Default::default()
        };
        let mut controller = PositionController::new();

        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        assert_eq!(state.current_pos, 1000);
        assert_eq!(cover.lift_percent, Some(100));
    }

    #[test]
    fn test_mark_handled_suppresses_seeded_request() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 500,
            requested_percent: 50,
            ..Default::default()
        };
        let mut controller = PositionController::new();
        controller.mark_handled(500);

        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        assert_eq!(stepper.motor().pulses, 0);
        assert!(cover.operations.is_empty());
    }

    #[test]
    fn test_each_step_reports_position() {
        let clock = MockClock::new();
        let mut state = default_state();
        let mut stepper = Stepper::new(MockMotor::default());
        let mut cover = MockCover {
            requested_raw: 510,
            requested_percent: 51,
            ..Default::default()
        };
        let mut controller = PositionController::new();

        controller.service(&mut state, &mut stepper, &mut cover, &clock);

        // 10 per-step raw reports plus the final one
        assert_eq!(cover.raw_reports, 11);
    }
}
