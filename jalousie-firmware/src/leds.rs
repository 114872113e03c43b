//! Status LED outputs

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

use jalousie_core::indicator::LedState;
use jalousie_core::traits::leds::StatusLeds;

/// Blink count of the boundary-committed acknowledge pattern
const ACK_BLINKS: u8 = 3;

/// Duration of each on/off phase of the acknowledge pattern
const ACK_PHASE_MS: u64 = 100;

/// The two calibration status LEDs
pub struct BoardLeds<'d> {
    min_led: Output<'d>,
    max_led: Output<'d>,
}

impl<'d> BoardLeds<'d> {
    pub fn new(min_led: Output<'d>, max_led: Output<'d>) -> Self {
        Self { min_led, max_led }
    }

    fn set(&mut self, min_on: bool, max_on: bool) {
        if min_on {
            self.min_led.set_high();
        } else {
            self.min_led.set_low();
        }
        if max_on {
            self.max_led.set_high();
        } else {
            self.max_led.set_low();
        }
    }
}

impl StatusLeds for BoardLeds<'_> {
    fn show(&mut self, state: LedState) {
        self.set(state.min_led, state.max_led);
    }

    fn acknowledge(&mut self) {
        // Blocks the control loop for the pattern duration; the next
        // iteration restores the phase indication via `show`.
        for _ in 0..ACK_BLINKS {
            self.set(true, true);
            block_for(Duration::from_millis(ACK_PHASE_MS));
            self.set(false, false);
            block_for(Duration::from_millis(ACK_PHASE_MS));
        }
    }
}
