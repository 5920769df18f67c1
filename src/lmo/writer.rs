//! LMO Writer
//!
//! Encodes a catalog in memory and persists it. Nothing is opened for
//! writing until encoding has succeeded.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{Po2LmoError, Result};
use crate::po::Catalog;

use super::{LmoBuilder, LmoImage, LmoSummary};

/// Encode a catalog into an in-memory LMO image
pub fn encode(catalog: &Catalog, config: &Config) -> Result<LmoImage> {
    let mut builder = LmoBuilder::new().with_trace(config.debug);
    for entry in catalog {
        builder.add(&entry.key, &entry.value)?;
    }
    builder.finish()
}

/// Encode a catalog and write it to `path`.
///
/// A catalog that yields no index records produces no file; a stale file at
/// `path` is removed so it cannot be mistaken for this run's output.
pub fn write_file(catalog: &Catalog, path: &Path, config: &Config) -> Result<LmoSummary> {
    let image = encode(catalog, config)?;

    if image.is_empty() {
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::warn!(path = %path.display(), "no entries to write; removed existing output")
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Po2LmoError::write(path, e)),
        }
        return Ok(LmoSummary {
            path: path.to_path_buf(),
            entry_count: 0,
            skipped_count: image.skipped_count,
            file_size: 0,
            written: false,
        });
    }

    let file_size = persist(&image, path, config).map_err(|e| Po2LmoError::write(path, e))?;

    Ok(LmoSummary {
        path: path.to_path_buf(),
        entry_count: image.entry_count(),
        skipped_count: image.skipped_count,
        file_size,
        written: true,
    })
}

/// Write the image to `path`; returns the size on disk
fn persist(image: &LmoImage, path: &Path, config: &Config) -> io::Result<u64> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&image.bytes)?;
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    if config.sync_output {
        file.sync_all()?;
    }

    Ok(file.metadata()?.len())
}
