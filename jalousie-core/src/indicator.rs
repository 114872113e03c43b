//! Status LED derivation
//!
//! The LED output is a pure function of the current mode and calibration
//! phase, recomputed every loop iteration. No debouncing or edge tracking:
//! this is a derived display, not an input.

use crate::calibration::CalibrationPhase;
use crate::state::Mode;

/// Desired level of the two status LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    /// Lit while the next commit captures the lower boundary
    pub min_led: bool,
    /// Lit while the next commit captures the upper boundary
    pub max_led: bool,
}

/// Derive the LED state for one iteration
pub fn led_state(mode: Mode, phase: CalibrationPhase) -> LedState {
    match (mode, phase) {
        (Mode::Remote, _) => LedState {
            min_led: false,
            max_led: false,
        },
        (Mode::Calibration, CalibrationPhase::Min) => LedState {
            min_led: true,
            max_led: false,
        },
        (Mode::Calibration, CalibrationPhase::Max) => LedState {
            min_led: false,
            max_led: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_mode_is_dark() {
        for phase in [CalibrationPhase::Min, CalibrationPhase::Max] {
            let leds = led_state(Mode::Remote, phase);
            assert!(!leds.min_led);
            assert!(!leds.max_led);
        }
    }

    #[test]
    fn test_calibration_phase_selects_led() {
        let min = led_state(Mode::Calibration, CalibrationPhase::Min);
        assert!(min.min_led && !min.max_led);

        let max = led_state(Mode::Calibration, CalibrationPhase::Max);
        assert!(!max.min_led && max.max_led);
    }
}
