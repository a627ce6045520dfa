// mediatag-cli/src/config.rs
//
// Resolves the effective configuration for a run.
//
// Precedence (lowest to highest): built-in defaults, the JSON config file
// (--config / MEDIATAG_CONFIG), MEDIATAG_* environment variables, flags.

use mediatag_core::config::utils::env_lookup;
use mediatag_core::{CoreConfig, CoreConfigBuilder};

use crate::cli::Cli;
use crate::error::CliResult;

/// Builds the configuration for `cli` using the process environment.
pub fn resolve_config(cli: &Cli) -> CliResult<CoreConfig> {
    resolve_config_with(cli, env_lookup)
}

/// Builds the configuration for `cli` with an explicit variable lookup.
pub fn resolve_config_with<F>(cli: &Cli, lookup: F) -> CliResult<CoreConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match &cli.config {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };
    let layered = base.with_lookup(lookup);
    let json_output = layered.json_output || cli.json;
    let strict = layered.strict || cli.strict;

    let mut builder = CoreConfigBuilder::from_config(layered)
        .json_output(json_output)
        .strict(strict);
    if let Some(dir) = &cli.log_dir {
        builder = builder.log_dir(dir.clone());
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_cli_from;
    use mediatag_core::Container;
    use std::path::PathBuf;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse_cli_from([
            "mediatag", "--json", "--strict", "--log-dir", "/tmp/mt", "postfix", "-r", "4k",
        ])
        .unwrap();
        let config = resolve_config_with(&cli, no_env).unwrap();
        assert!(config.json_output);
        assert!(config.strict);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/mt")));
        assert_eq!(config.default_container, Container::Mkv);
    }

    #[test]
    fn environment_applies_without_flags() {
        let cli = parse_cli_from(["mediatag", "postfix", "-r", "4k"]).unwrap();
        let config = resolve_config_with(&cli, |key| match key {
            "MEDIATAG_CONTAINER" => Some("mp4".to_string()),
            "MEDIATAG_JSON" => Some("true".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.default_container, Container::Mp4);
        assert!(config.json_output);
        assert!(!config.strict);
    }

    #[test]
    fn config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mediatag.json");
        std::fs::write(&path, r#"{ "default_container": "mp4", "strict": true }"#).unwrap();

        let cli = parse_cli_from([
            "mediatag".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "postfix".to_string(),
        ])
        .unwrap();
        let config = resolve_config_with(&cli, no_env).unwrap();
        assert_eq!(config.default_container, Container::Mp4);
        assert!(config.strict);
    }
}
