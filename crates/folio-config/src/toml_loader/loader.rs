//! Reading and parsing config files.

use crate::schema::FolioConfig;
use crate::validation;
use folio_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config TOML. Missing sections and fields take their defaults.
pub fn parse_config(content: &str) -> Result<FolioConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a TOML file that must exist.
///
/// A config that parses but fails validation is still returned, with a
/// warning; [`crate::load_config`] is the entry point that rejects it.
pub fn load_from_path(path: &Path) -> Result<FolioConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = parse_config(&content)?;
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config validation warning: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `path`, or write the commented default there and use defaults when
/// it does not exist yet.
pub fn load_or_create(path: &Path) -> Result<FolioConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(path)?;
            Ok(FolioConfig::default())
        }
        other => other,
    }
}

/// [`load_or_create`] at the platform default path.
///
/// On macOS: `~/Library/Application Support/folio/config.toml`
/// On Linux: `~/.config/folio/config.toml`
pub fn load_default() -> Result<FolioConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
