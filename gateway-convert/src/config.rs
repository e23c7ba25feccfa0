use std::fs;
use std::path::Path;

use decl_file::Encoding;
use serde::Deserialize;
use thiserror::Error;

use crate::format::Format;

/// Defaults for the `convert` command, read from a TOML file.
///
/// Every key is optional; command-line flags take precedence.
///
/// ```toml
/// from = "gateway"
/// to = "control-plane"
/// encoding = "yaml"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    pub from: Option<Format>,
    pub to: Option<Format>,
    pub encoding: Option<Encoding>,
}

/// Errors returned when loading a config file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load convert defaults from a TOML file.
pub fn load_config(path: &Path) -> Result<ConvertConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_config(&raw, path.display().to_string())
}

fn parse_config(raw: &str, path: String) -> Result<ConvertConfig, ConfigLoadError> {
    toml::from_str(raw).map_err(|source| ConfigLoadError::Parse { path, source })
}
