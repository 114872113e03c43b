//! Idle power management and persistence cadence
//!
//! Decouples motor power state and storage writes from motion events. A
//! short idle interval cuts power to the motor stage; the long interval
//! persists a changed position (rate-limited to one attempt per interval)
//! and then puts the driver into low-power sleep. Below the long interval
//! the driver is kept electrically awake even while the stage is disabled,
//! so a new motion command does not pay wake latency on every step.

use crate::motion::Stepper;
use crate::state::ActuatorState;
use crate::traits::clock::Clock;
use crate::traits::motor::MotorDriver;
use crate::traits::store::PositionStore;

/// Idle time after which the motor power stage is disabled
pub const IDLE_DISABLE_MS: u64 = 1000;

/// Idle time after which the position is persisted and the driver sleeps
pub const IDLE_SLEEP_MS: u64 = 5 * 60 * 1000;

/// Run one idle-management iteration
///
/// Returns whether a position record was persisted during this call.
pub fn service<M, S>(
    state: &mut ActuatorState,
    stepper: &mut Stepper<M>,
    store: &mut S,
    clock: &impl Clock,
) -> bool
where
    M: MotorDriver,
    S: PositionStore,
{
    let now = clock.now_ms();
    let idle_ms = now.saturating_sub(state.last_move_ms);

    if idle_ms >= IDLE_DISABLE_MS {
        stepper.disable();
    }

    if idle_ms < IDLE_SLEEP_MS {
        stepper.wake();
        return false;
    }

    let mut saved = false;
    if state.is_dirty() && now.saturating_sub(state.last_save_ms) >= IDLE_SLEEP_MS {
        // A failed write is not retried until the next save window
        state.last_save_ms = now;
        if store.save(&state.record()).is_ok() {
            state.mark_saved(now);
            saved = true;
        }
    }
    stepper.sleep();

    saved
}
