//! LMO Module
//!
//! Lua Machine Object: the binary lookup table read by the LuCI runtime.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Data Block (variable)                                   │
//! │   [Value][NUL padding to 4 bytes]                       │
//! │   ... repeated for each kept entry, catalog order ...   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Index Block (16 bytes per entry, ascending KeyId)       │
//! │   KeyId: u32 | ValId: u32 | Offset: u32 | Length: u32   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                        │
//! │   IndexOffset: u32                                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are big-endian. `KeyId`/`ValId` are [`sfh_hash`] of the
//! msgid/msgstr bytes; keys themselves are not stored. The runtime binary
//! searches the index by `KeyId`, so every id in a file is unique and an
//! entry whose key and value hash alike is left out (lookup falls back to
//! the key).
//!
//! [`sfh_hash`]: crate::hash::sfh_hash

mod builder;
mod writer;

use std::fmt;
use std::path::PathBuf;

use bytes::{BufMut, Bytes};

pub use builder::LmoBuilder;
pub use writer::{encode, write_file};

// =============================================================================
// Shared Constants
// =============================================================================

/// Size of one index record: KeyId (4) + ValId (4) + Offset (4) + Length (4)
pub const INDEX_ENTRY_SIZE: usize = 16;

/// Footer size: IndexOffset (4)
pub const FOOTER_SIZE: usize = 4;

/// Values in the data block start on this boundary
pub const ALIGNMENT: usize = 4;

// =============================================================================
// Index Record
// =============================================================================

/// One record of the index block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub key_id: u32,
    pub val_id: u32,
    /// Start of the value in the data block
    pub offset: u32,
    /// Unpadded value length
    pub length: u32,
}

impl IndexEntry {
    /// Append the big-endian record to `buf`
    pub fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_u32(self.key_id);
        buf.put_u32(self.val_id);
        buf.put_u32(self.offset);
        buf.put_u32(self.length);
    }
}

// =============================================================================
// Encoded Output
// =============================================================================

/// A fully encoded LMO file held in memory
#[derive(Debug, Clone)]
pub struct LmoImage {
    /// File contents; empty when no entry was kept
    pub bytes: Bytes,
    /// Index records in file order
    pub index: Vec<IndexEntry>,
    /// Entries left out because key and value hash alike
    pub skipped_count: usize,
    /// Size of the data block, as written in the footer
    pub index_offset: u32,
}

impl LmoImage {
    /// Number of index records
    pub fn entry_count(&self) -> usize {
        self.index.len()
    }

    /// True when there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Outcome of writing an LMO file
#[derive(Debug, Clone)]
pub struct LmoSummary {
    /// Destination path
    pub path: PathBuf,
    /// Index records written
    pub entry_count: usize,
    /// Entries left out because key and value hash alike
    pub skipped_count: usize,
    /// Bytes on disk (0 when nothing was written)
    pub file_size: u64,
    /// False when the catalog produced no records and no file was created
    pub written: bool,
}

/// `0x%08x` formatting for hash ids in log fields
pub(crate) struct Hex(pub u32);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
