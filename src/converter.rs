//! Converter Module
//!
//! Coordinates one PO → LMO conversion.
//!
//! ## Steps
//! 1. Parse the whole PO file into a [`Catalog`] (fails on the first error)
//! 2. Encode the catalog in memory
//! 3. Write the image to the destination

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::lmo::{self, LmoSummary};
use crate::po::{self, Catalog};

/// Runs conversions with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter with the given config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert `input` (PO) into `output` (LMO)
    pub fn convert(&self, input: &Path, output: &Path) -> Result<LmoSummary> {
        let catalog = self.parse(input)?;
        self.encode(&catalog, output)
    }

    /// Parse step only
    pub fn parse(&self, input: &Path) -> Result<Catalog> {
        let catalog = po::parse_file(input)?;
        tracing::debug!(
            input = %input.display(),
            entries = catalog.len(),
            header = catalog.header().is_some(),
            "parsed translation entries"
        );
        Ok(catalog)
    }

    /// Encode step only
    pub fn encode(&self, catalog: &Catalog, output: &Path) -> Result<LmoSummary> {
        let summary = lmo::write_file(catalog, output, &self.config)?;
        tracing::info!(
            output = %output.display(),
            entries = summary.entry_count,
            skipped = summary.skipped_count,
            bytes = summary.file_size,
            written = summary.written,
            "generated LMO file"
        );
        Ok(summary)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
