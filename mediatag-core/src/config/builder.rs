// ============================================================================
// mediatag-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent API for creating CoreConfig instances, starting from defaults.

use std::path::PathBuf;

use super::CoreConfig;
use crate::naming::Container;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration (e.g. one loaded from a file).
    pub fn from_config(config: CoreConfig) -> Self {
        Self { config }
    }

    /// Sets the container used when a request names none.
    pub fn default_container(mut self, container: Container) -> Self {
        self.config.default_container = container;
        self
    }

    /// Enables or disables strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Enables or disables JSON output.
    pub fn json_output(mut self, json_output: bool) -> Self {
        self.config.json_output = json_output;
        self
    }

    /// Sets the log directory.
    pub fn log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.config.log_dir = Some(log_dir.into());
        self
    }

    /// Builds the CoreConfig instance.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
