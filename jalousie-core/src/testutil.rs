//! Mock collaborators for host tests

use core::cell::Cell;

use heapless::Vec;

use crate::indicator::LedState;
use crate::record::PositionRecord;
use crate::traits::clock::Clock;
use crate::traits::cover::{CoverHandle, Operation};
use crate::traits::leds::StatusLeds;
use crate::traits::motor::{Direction, MotorDriver};
use crate::traits::store::{PositionStore, StoreError};

/// Manually advanced millisecond clock
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Records every pin-level interaction with the motor backend
#[derive(Debug, Default)]
pub struct MockMotor {
    pub pulses: usize,
    pub last_pulse_us: u32,
    pub direction: Option<Direction>,
    pub enabled: bool,
    pub awake: bool,
    pub enable_calls: usize,
    pub awake_calls: usize,
}

impl MotorDriver for MockMotor {
    fn set_direction(&mut self, dir: Direction) {
        self.direction = Some(dir);
    }

    fn pulse(&mut self, width_us: u32) {
        self.pulses += 1;
        self.last_pulse_us = width_us;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.enable_calls += 1;
    }

    fn set_awake(&mut self, awake: bool) {
        self.awake = awake;
        self.awake_calls += 1;
    }
}

/// In-memory position store with fault injection
#[derive(Debug, Default)]
pub struct MockStore {
    /// Record returned by `load`; `None` models uninitialized storage
    pub record: Option<PositionRecord>,
    /// Every successfully saved record, in order
    pub saves: Vec<PositionRecord, 16>,
    /// Total save attempts, including failed ones
    pub attempts: usize,
    pub fail_loads: bool,
    pub fail_saves: bool,
}

impl PositionStore for MockStore {
    fn load(&mut self) -> Result<Option<PositionRecord>, StoreError> {
        if self.fail_loads {
            return Err(StoreError::Read);
        }
        Ok(self.record)
    }

    fn save(&mut self, record: &PositionRecord) -> Result<(), StoreError> {
        self.attempts += 1;
        if self.fail_saves {
            return Err(StoreError::Write);
        }
        self.record = Some(*record);
        let _ = self.saves.push(*record);
        Ok(())
    }
}

/// Cover collaborator capturing everything the core publishes
#[derive(Debug, Default)]
pub struct MockCover {
    pub requested_raw: u16,
    pub requested_percent: u8,
    pub lift_raw: Option<u16>,
    pub lift_percent: Option<u8>,
    pub operations: Vec<Operation, 8>,
    /// Count of raw-position reports (one per step plus the final one)
    pub raw_reports: usize,
}

impl CoverHandle for MockCover {
    fn requested_lift_raw(&self) -> u16 {
        self.requested_raw
    }

    fn requested_lift_percent(&self) -> u8 {
        self.requested_percent
    }

    fn set_lift_raw(&mut self, raw: u16) {
        self.lift_raw = Some(raw);
        self.raw_reports += 1;
    }

    fn set_lift_percent(&mut self, percent: u8) {
        self.lift_percent = Some(percent);
    }

    fn set_operation(&mut self, operation: Operation) {
        let _ = self.operations.push(operation);
    }
}

/// Status LEDs counting acknowledge patterns
#[derive(Debug, Default)]
pub struct MockLeds {
    pub acknowledges: usize,
}

impl StatusLeds for MockLeds {
    fn show(&mut self, _state: LedState) {}

    fn acknowledge(&mut self) {
        self.acknowledges += 1;
    }
}
