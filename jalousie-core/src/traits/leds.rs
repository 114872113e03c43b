//! Status LED trait

use crate::indicator::LedState;

/// Trait for the two status LEDs
pub trait StatusLeds {
    /// Apply the derived LED state
    fn show(&mut self, state: LedState);

    /// Play the boundary-committed acknowledge pattern
    ///
    /// Blocks for the duration of the pattern; the control loop resumes
    /// afterwards.
    fn acknowledge(&mut self);
}
