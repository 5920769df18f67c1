//! LMO Builder
//!
//! Accumulates entries into the data block and index, then seals the image.

use std::collections::HashMap;

use bytes::{BufMut, BytesMut};

use crate::error::{Po2LmoError, Result};
use crate::hash::sfh_hash;

use super::{Hex, IndexEntry, LmoImage, ALIGNMENT, FOOTER_SIZE, INDEX_ENTRY_SIZE};

/// Builder for LMO images
///
/// Call `add()` for each entry (any order), then `finish()` to sort the index
/// and append it with the footer.
#[derive(Debug, Default)]
pub struct LmoBuilder {
    /// Data block: padded values in insertion order
    data: BytesMut,
    /// Index records, unsorted until `finish`
    index: Vec<IndexEntry>,
    /// key_id → key, for collision reports
    keys: HashMap<u32, Vec<u8>>,
    /// Current end of the data block
    offset: u32,
    /// Entries left out because key and value hash alike
    skipped: usize,
    /// Emit per-entry DEBUG events
    trace: bool,
}

impl LmoBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the per-entry diagnostic trace
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Number of index records so far
    pub fn entry_count(&self) -> usize {
        self.index.len()
    }

    /// Number of entries left out so far
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Add one entry.
    ///
    /// Returns `Ok(false)` when the entry is left out because its key and
    /// value hash to the same id.
    pub fn add(&mut self, key: &[u8], value: &[u8]) -> Result<bool> {
        let key_id = sfh_hash(key);
        let val_id = sfh_hash(value);

        if key_id == val_id {
            self.skipped += 1;
            if self.trace {
                tracing::debug!(
                    key = %String::from_utf8_lossy(key),
                    key_id = %Hex(key_id),
                    "skipped: key and value hash alike"
                );
            }
            return Ok(false);
        }

        if let Some(first) = self.keys.get(&key_id) {
            return Err(Po2LmoError::HashCollision {
                hash: key_id,
                first: String::from_utf8_lossy(first).into_owned(),
                second: String::from_utf8_lossy(key).into_owned(),
            });
        }

        // Validate field widths before touching the buffers
        let length = u32::try_from(value.len()).map_err(|_| Po2LmoError::EntryTooLarge {
            key: String::from_utf8_lossy(key).into_owned(),
            len: value.len(),
        })?;
        let padded = padded_len(value.len());
        let end = u64::from(self.offset) + padded as u64;
        let next_offset =
            u32::try_from(end).map_err(|_| Po2LmoError::DataTooLarge { size: end })?;

        let entry = IndexEntry {
            key_id,
            val_id,
            offset: self.offset,
            length,
        };

        self.data.reserve(padded);
        self.data.put_slice(value);
        self.data.put_bytes(0, padded - value.len());

        if self.trace {
            tracing::debug!(
                key = %String::from_utf8_lossy(key),
                key_id = %Hex(key_id),
                val_id = %Hex(val_id),
                offset = entry.offset,
                length = entry.length,
                "included"
            );
        }

        self.index.push(entry);
        self.keys.insert(key_id, key.to_vec());
        self.offset = next_offset;

        Ok(true)
    }

    /// Finish building: sort the index, append it and the footer
    pub fn finish(self) -> Result<LmoImage> {
        let mut index = self.index;

        if index.is_empty() {
            return Ok(LmoImage {
                bytes: Default::default(),
                index,
                skipped_count: self.skipped,
                index_offset: 0,
            });
        }

        // key_ids are unique (collisions rejected in `add`), so this order is total
        index.sort_unstable_by_key(|entry| entry.key_id);

        let mut bytes = self.data;
        bytes.reserve(index.len() * INDEX_ENTRY_SIZE + FOOTER_SIZE);

        for (slot, entry) in index.iter().enumerate() {
            if self.trace {
                tracing::debug!(
                    slot,
                    key_id = %Hex(entry.key_id),
                    val_id = %Hex(entry.val_id),
                    offset = entry.offset,
                    length = entry.length,
                    "index entry"
                );
            }
            entry.write_to(&mut bytes);
        }

        bytes.put_u32(self.offset);

        if self.trace {
            tracing::debug!(
                index_offset = self.offset,
                entries = index.len(),
                skipped = self.skipped,
                "sealed LMO image"
            );
        }

        Ok(LmoImage {
            bytes: bytes.freeze(),
            index,
            skipped_count: self.skipped,
            index_offset: self.offset,
        })
    }
}

/// Round `len` up to the data block alignment
fn padded_len(len: usize) -> usize {
    len.div_ceil(ALIGNMENT) * ALIGNMENT
}
