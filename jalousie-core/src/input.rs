//! Debounced button input
//!
//! Filters the raw up/down button levels into stable logical states. Each
//! button keeps its own debounce record keyed by logical identifier (not by
//! pin number). A raw-level change restarts that button's debounce window;
//! the reported state only follows once the level has held for the full
//! window. In remote-control mode the reader is suppressed and reports both
//! buttons released - buttons are calibration-only inputs.

/// Debounce window in milliseconds
pub const DEBOUNCE_MS: u64 = 70;

/// Logical button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Moves the blind toward the upper boundary
    Up,
    /// Moves the blind toward the lower boundary
    Down,
}

/// Per-button debounce record
#[derive(Debug)]
struct Debounce {
    /// Reported stable level
    stable: bool,
    /// Most recent raw level
    last_raw: bool,
    /// Timestamp of the last raw-level change (ms)
    changed_at_ms: u64,
}

impl Debounce {
    const fn new() -> Self {
        Self {
            stable: false,
            last_raw: false,
            changed_at_ms: 0,
        }
    }

    fn sample(&mut self, raw: bool, now_ms: u64) {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.changed_at_ms = now_ms;
        } else if now_ms.saturating_sub(self.changed_at_ms) >= DEBOUNCE_MS {
            self.stable = raw;
        }
    }
}

/// Debounced reader for the two calibration buttons
#[derive(Debug)]
pub struct Buttons {
    up: Debounce,
    down: Debounce,
    suppressed: bool,
}

impl Default for Buttons {
    fn default() -> Self {
        Self::new()
    }
}

impl Buttons {
    pub const fn new() -> Self {
        Self {
            up: Debounce::new(),
            down: Debounce::new(),
            suppressed: false,
        }
    }

    /// Suppress the buttons (remote mode) or re-enable them (calibration)
    ///
    /// Debounce records keep tracking the raw levels while suppressed, so
    /// re-enabling does not report a phantom edge.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    /// Feed one raw sample per button
    ///
    /// Safe to call many times per loop iteration: an unchanged level never
    /// registers as a new transition.
    pub fn sample(&mut self, up_raw: bool, down_raw: bool, now_ms: u64) {
        self.up.sample(up_raw, now_ms);
        self.down.sample(down_raw, now_ms);
    }

    /// Stable pressed state of one button
    pub fn is_pressed(&self, button: Button) -> bool {
        if self.suppressed {
            return false;
        }
        match button {
            Button::Up => self.up.stable,
            Button::Down => self.down.stable,
        }
    }

    /// Both buttons stably pressed (the commit-hold chord)
    pub fn both_pressed(&self) -> bool {
        self.is_pressed(Button::Up) && self.is_pressed(Button::Down)
    }

    /// Exactly one button stably pressed
    ///
    /// Returns `None` while both are held, so a commit hold never doubles
    /// as a single-button move.
    pub fn single_pressed(&self) -> Option<Button> {
        match (self.is_pressed(Button::Up), self.is_pressed(Button::Down)) {
            (true, false) => Some(Button::Up),
            (false, true) => Some(Button::Down),
            _ => None,
        }
    }
}
