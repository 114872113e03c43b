//! Remote-attribute collaborator state
//!
//! The wireless protocol stack is outside this firmware's scope; these
//! statics stand in for its window-covering attribute store. The stack side
//! writes the requested lift position and reads back the actual position and
//! operation state that the control loop publishes.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use jalousie_core::traits::cover::Operation;

/// Requested lift position, written by the protocol stack
#[derive(Debug, Clone, Copy)]
pub struct LiftRequest {
    pub raw: u16,
    pub percent: u8,
}

/// Actual lift position, published by the control loop
#[derive(Debug, Clone, Copy)]
pub struct LiftActual {
    pub raw: u16,
    pub percent: u8,
}

/// Requested lift attributes (polled every control-loop iteration)
pub static REQUESTED_LIFT: Mutex<CriticalSectionRawMutex, Cell<LiftRequest>> =
    Mutex::new(Cell::new(LiftRequest { raw: 0, percent: 0 }));

/// Actual lift attributes (pushed on every motor step)
pub static ACTUAL_LIFT: Mutex<CriticalSectionRawMutex, Cell<LiftActual>> =
    Mutex::new(Cell::new(LiftActual { raw: 0, percent: 0 }));

/// Current operation attribute (opening/closing/stopped)
pub static OPERATION: Mutex<CriticalSectionRawMutex, Cell<Operation>> =
    Mutex::new(Cell::new(Operation::Stopped));
