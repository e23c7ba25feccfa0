use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::content::Content;
use crate::reader::STDIO_PATH;

/// Output serialization for a written document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Indented YAML, the usual on-disk form of declarative config.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Errors that can occur while writing a [`Content`] document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize YAML.
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Failed to serialize JSON (for example a sequence or mapping used as a key).
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write the output file.
    #[error("failed to write {path}: {source}")]
    Io { path: String, source: io::Error },
}

/// Serialize a [`Content`] document into bytes.
pub fn write(content: &Content, encoding: Encoding) -> Result<Vec<u8>, WriteError> {
    match encoding {
        Encoding::Yaml => Ok(serde_yaml::to_string(content)?.into_bytes()),
        Encoding::Json => {
            let mut bytes = serde_json::to_vec_pretty(content)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
    }
}

/// Serialize a [`Content`] document and write it to `path` (`-` for stdout).
pub fn write_file(content: &Content, path: &Path, encoding: Encoding) -> Result<(), WriteError> {
    let bytes = write(content, encoding)?;
    let result = if path == Path::new(STDIO_PATH) {
        io::stdout().lock().write_all(&bytes)
    } else {
        fs::write(path, bytes)
    };
    result.map_err(|source| WriteError::Io {
        path: if path == Path::new(STDIO_PATH) {
            "<stdout>".to_string()
        } else {
            path.display().to_string()
        },
        source,
    })
}
