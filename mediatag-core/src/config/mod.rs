//! Configuration structures and constants for the mediatag-core library.
//!
//! Configuration is layered: built-in defaults, then an optional JSON file,
//! then `MEDIATAG_*` environment variables. Consumers (e.g. mediatag-cli)
//! apply their own flags on top.

mod builder;
pub mod utils;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::naming::Container;

pub use builder::CoreConfigBuilder;

/// Environment variable overriding the default container.
pub const ENV_CONTAINER: &str = "MEDIATAG_CONTAINER";

/// Environment variable enabling strict mode.
pub const ENV_STRICT: &str = "MEDIATAG_STRICT";

/// Environment variable enabling JSON output.
pub const ENV_JSON: &str = "MEDIATAG_JSON";

/// Environment variable setting the log directory.
pub const ENV_LOG_DIR: &str = "MEDIATAG_LOG_DIR";

/// Main configuration structure for the mediatag-core library.
///
/// # Examples
///
/// ```rust
/// use mediatag_core::config::CoreConfigBuilder;
/// use mediatag_core::naming::Container;
///
/// let config = CoreConfigBuilder::new()
///     .default_container(Container::Mp4)
///     .strict(true)
///     .build();
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Container used when a request does not name one
    pub default_container: Container,

    /// Reject results whose resolution is unknown instead of warning
    pub strict: bool,

    /// Emit machine-readable JSON instead of styled text
    pub json_output: bool,

    /// Directory for run log files; console logging when unset
    pub log_dir: Option<PathBuf>,
}

impl CoreConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_lookup(utils::env_lookup)
    }

    /// Loads a JSON configuration file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Applies `MEDIATAG_*` overrides from `lookup` on top of `self`.
    pub fn with_lookup<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            default_container: utils::get_parsed(&lookup, ENV_CONTAINER, self.default_container),
            strict: utils::get_bool(&lookup, ENV_STRICT, self.strict),
            json_output: utils::get_bool(&lookup, ENV_JSON, self.json_output),
            log_dir: utils::get_path(&lookup, ENV_LOG_DIR, self.log_dir),
        }
    }

    /// Checks that configured paths are usable.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(dir) = &self.log_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(CoreError::Config(format!(
                    "log directory {} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.default_container, Container::Mkv);
        assert!(!config.strict);
        assert!(!config.json_output);
        assert!(config.log_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lookup_overrides() {
        let config = CoreConfig::default().with_lookup(|key| match key {
            ENV_CONTAINER => Some("mp4".to_string()),
            ENV_STRICT => Some("1".to_string()),
            ENV_LOG_DIR => Some("/tmp/mediatag".to_string()),
            _ => None,
        });
        assert_eq!(config.default_container, Container::Mp4);
        assert!(config.strict);
        assert!(!config.json_output);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/mediatag")));
    }

    #[test]
    fn bad_container_keeps_default() {
        let config = CoreConfig::default()
            .with_lookup(|key| (key == ENV_CONTAINER).then(|| "avi".to_string()));
        assert_eq!(config.default_container, Container::Mkv);
    }
}
