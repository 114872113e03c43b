//! Remote cover-attribute collaborator trait
//!
//! Models the window-covering attribute surface of the smart-home protocol
//! stack: the stack writes the requested lift position, the core publishes
//! the actual position and the current operation as it moves.

/// Motion reported to the remote collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Moving toward the upper boundary
    Opening,
    /// Moving toward the lower boundary
    Closing,
    /// Not moving
    Stopped,
}

/// Trait for the cover attribute surface
pub trait CoverHandle {
    /// Requested lift position in raw steps
    fn requested_lift_raw(&self) -> u16;

    /// Requested lift position as a percentage
    fn requested_lift_percent(&self) -> u8;

    /// Publish the actual lift position in raw steps
    fn set_lift_raw(&mut self, raw: u16);

    /// Publish the actual lift position as a percentage
    fn set_lift_percent(&mut self, percent: u8);

    /// Publish the current operation state
    fn set_operation(&mut self, operation: Operation);
}
