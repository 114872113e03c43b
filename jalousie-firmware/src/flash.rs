//! Flash-backed position store
//!
//! Uses sequential-storage for wear-leveled key-value storage in the last
//! 64KB of flash. The stored value is the fixed eight-byte position record
//! defined in `jalousie-core::record`; its sentinel word doubles as the
//! first-run detector, so a fresh or corrupted partition reads back as
//! uninitialized rather than as an error.

use defmt::*;
use embassy_futures::block_on;
use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use jalousie_core::record::PositionRecord;
use jalousie_core::traits::store::{PositionStore, StoreError};

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB flash
pub const STORE_PARTITION_SIZE: usize = 64 * 1024; // 64KB for the record
pub const STORE_PARTITION_START: usize = FLASH_SIZE - STORE_PARTITION_SIZE;

/// Flash range for the store partition
pub const STORE_RANGE: core::ops::Range<u32> =
    (STORE_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Storage keys for persisted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StorageKey {
    /// Position record (boundaries + current position)
    Position = 0,
}

impl map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = *self as u8;
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        match buffer[0] {
            0 => Ok((StorageKey::Position, 1)),
            _ => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}

/// RP2040 flash store
///
/// The flash operations are async (DMA reads), but the store trait is
/// synchronous like the control loop that calls it, so operations complete
/// under `block_on`. Saves happen at most once per idle window, so the
/// stall is rare and bounded.
pub struct FlashStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> FlashStore<'d> {
    /// Create a new flash store
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }
}

impl PositionStore for FlashStore<'_> {
    fn load(&mut self) -> Result<Option<PositionRecord>, StoreError> {
        let mut data_buffer = [0u8; 64];

        let result = block_on(map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            STORE_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &StorageKey::Position,
        ));

        match result {
            Ok(Some(bytes)) => match PositionRecord::from_bytes(bytes) {
                Some(record) => {
                    debug!(
                        "Loaded record: min={} max={} current={}",
                        record.min_pos, record.max_pos, record.current_pos
                    );
                    Ok(Some(record))
                }
                None => {
                    warn!("Stored record sentinel mismatch, treating as uninitialized");
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("No position record in flash");
                Ok(None)
            }
            Err(_) => {
                warn!("Flash read failed");
                Err(StoreError::Read)
            }
        }
    }

    fn save(&mut self, record: &PositionRecord) -> Result<(), StoreError> {
        let mut data_buffer = [0u8; 64];
        let bytes = record.to_bytes();
        let value: &[u8] = &bytes;

        block_on(map::store_item(
            &mut self.flash,
            STORE_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &StorageKey::Position,
            &value,
        ))
        .map_err(|_| {
            warn!("Flash write failed");
            StoreError::Write
        })
    }
}
