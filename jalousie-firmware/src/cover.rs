//! Attribute-backed cover handle
//!
//! Implements the core's cover-collaborator trait over the attribute
//! statics in `channels`.

use jalousie_core::traits::cover::{CoverHandle, Operation};

use crate::channels::{LiftRequest, ACTUAL_LIFT, OPERATION, REQUESTED_LIFT};

/// Cover handle used by the control loop
pub struct AttributeCover;

impl AttributeCover {
    /// Seed the requested-lift attributes from the persisted position
    ///
    /// Keeps the first poll after boot from commanding a move; the stack
    /// mirrors the actual position when it attaches.
    pub fn seed_requested(&mut self, raw: u16, percent: u8) {
        REQUESTED_LIFT.lock(|c| c.set(LiftRequest { raw, percent }));
    }
}

impl CoverHandle for AttributeCover {
    fn requested_lift_raw(&self) -> u16 {
        REQUESTED_LIFT.lock(|c| c.get().raw)
    }

    fn requested_lift_percent(&self) -> u8 {
        REQUESTED_LIFT.lock(|c| c.get().percent)
    }

    fn set_lift_raw(&mut self, raw: u16) {
        ACTUAL_LIFT.lock(|c| {
            let mut actual = c.get();
            actual.raw = raw;
            c.set(actual);
        });
    }

    fn set_lift_percent(&mut self, percent: u8) {
        ACTUAL_LIFT.lock(|c| {
            let mut actual = c.get();
            actual.percent = percent;
            c.set(actual);
        });
    }

    fn set_operation(&mut self, operation: Operation) {
        OPERATION.lock(|c| c.set(operation));
    }
}
