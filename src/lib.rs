//! # po2lmo
//!
//! Converts GNU gettext PO catalogs into LMO (Lua Machine Object) files:
//! - PO parsing with escape and continuation handling
//! - Duplicate msgid detection with line numbers
//! - SuperFastHash ids, bit-compatible with the C runtime
//! - Byte-exact LMO output (padded data block, sorted index, footer)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   input.po   │────►│  PO Parser   │────►│   Catalog    │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  │
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  output.lmo  │◄────│  LMO Writer  │◄────│ LMO Builder  │
//! └──────────────┘     └──────────────┘     └──────┬───────┘
//!                                                  │
//!                                           ┌──────▼───────┐
//!                                           │SuperFastHash │
//!                                           └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod hash;
pub mod po;
pub mod lmo;
pub mod converter;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Po2LmoError, Result};
pub use config::Config;
pub use converter::Converter;
pub use hash::sfh_hash;
pub use lmo::{LmoImage, LmoSummary};
pub use po::{Catalog, Entry};

use std::path::Path;

/// Parse a PO file into a catalog
pub fn parse(path: &Path) -> Result<Catalog> {
    po::parse_file(path)
}

/// Encode a catalog into an LMO file at `path`
pub fn encode(catalog: &Catalog, path: &Path, config: &Config) -> Result<LmoSummary> {
    lmo::write_file(catalog, path, config)
}

// =============================================================================
// Version Info
// =============================================================================

/// Current version of po2lmo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
