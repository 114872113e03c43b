//! Persisted position record
//!
//! The record is a fixed eight-byte little-endian block: three `u16` position
//! fields followed by a `u16` sentinel word. The sentinel distinguishes
//! never-initialized (or corrupted) storage from a valid record; on mismatch
//! the caller falls back to the device defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel word marking an initialized record
pub const RECORD_SENTINEL: u16 = 0xB11D;

/// Serialized record length in bytes
pub const RECORD_LEN: usize = 8;

/// Byte offset of `min_pos` in the stored block
pub const MIN_POS_OFFSET: usize = 0;
/// Byte offset of `max_pos` in the stored block
pub const MAX_POS_OFFSET: usize = 2;
/// Byte offset of `current_pos` in the stored block
pub const CURRENT_POS_OFFSET: usize = 4;
/// Byte offset of the sentinel word
pub const SENTINEL_OFFSET: usize = 6;

/// Default travel boundaries for an uncalibrated device (raw steps)
pub const DEFAULT_MIN_POS: u16 = 0;
pub const DEFAULT_MAX_POS: u16 = 1000;

/// Calibrated travel boundaries and last known position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionRecord {
    /// Lower travel boundary (raw steps)
    pub min_pos: u16,
    /// Upper travel boundary (raw steps)
    pub max_pos: u16,
    /// Last known motor position (raw steps)
    pub current_pos: u16,
}

impl Default for PositionRecord {
    fn default() -> Self {
        Self::defaults()
    }
}

impl PositionRecord {
    /// Factory defaults: full device range with the motor assumed mid-travel
    pub const fn defaults() -> Self {
        Self {
            min_pos: DEFAULT_MIN_POS,
            max_pos: DEFAULT_MAX_POS,
            current_pos: DEFAULT_MIN_POS + (DEFAULT_MAX_POS - DEFAULT_MIN_POS) / 2,
        }
    }

    /// Serialize to the fixed storage layout, sentinel included
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut bytes = [0u8; RECORD_LEN];
        bytes[MIN_POS_OFFSET..MIN_POS_OFFSET + 2].copy_from_slice(&self.min_pos.to_le_bytes());
        bytes[MAX_POS_OFFSET..MAX_POS_OFFSET + 2].copy_from_slice(&self.max_pos.to_le_bytes());
        bytes[CURRENT_POS_OFFSET..CURRENT_POS_OFFSET + 2]
            .copy_from_slice(&self.current_pos.to_le_bytes());
        bytes[SENTINEL_OFFSET..SENTINEL_OFFSET + 2].copy_from_slice(&RECORD_SENTINEL.to_le_bytes());
        bytes
    }

    /// Parse a stored block
    ///
    /// Returns `None` when the block is too short or the sentinel does not
    /// match, i.e. the storage was never initialized.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < RECORD_LEN {
            return None;
        }

        let word = |offset: usize| u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);

        if word(SENTINEL_OFFSET) != RECORD_SENTINEL {
            return None;
        }

        Some(Self {
            min_pos: word(MIN_POS_OFFSET),
            max_pos: word(MAX_POS_OFFSET),
            current_pos: word(CURRENT_POS_OFFSET),
        })
    }
}
