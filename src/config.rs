//! Configuration for po2lmo
//!
//! Conversion options, passed explicitly to the encoder.

/// Options for a single conversion run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Emit a per-entry trace (key, hashes, index slot) at DEBUG level.
    /// Never changes the bytes written.
    pub debug: bool,

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------
    /// fsync the output file before reporting success
    pub sync_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            sync_output: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable the per-entry debug trace
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    /// Enable or disable fsync of the output file
    pub fn sync_output(mut self, enabled: bool) -> Self {
        self.config.sync_output = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
