use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::content::Content;

/// Path that selects standard input (when loading) or standard output (when writing).
pub const STDIO_PATH: &str = "-";

/// Errors that can occur while loading a document from one or more files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Loader was called with an empty path list.
    #[error("no input files provided")]
    NoInputs,
    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    /// Input was not a valid YAML document of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    /// Input was not a valid JSON document of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    /// Two fragments disagree on a non-collection top-level key.
    #[error("conflicting values for top-level key '{key}' in {path}")]
    Conflict { key: String, path: String },
}

/// Parse YAML (or JSON, which YAML accepts) bytes into a [`Content`] document.
///
/// Empty, comment-only, and null documents parse as an empty [`Content`].
/// Merge keys (`<<: *anchor`) are resolved before anything is decoded.
pub fn parse(bytes: &[u8]) -> Result<Content, serde_yaml::Error> {
    if is_blank_yaml(bytes) {
        return Ok(Content::default());
    }
    let mut value: Value = serde_yaml::from_slice(bytes)?;
    if value.is_null() {
        return Ok(Content::default());
    }
    value.apply_merge()?;
    serde_yaml::from_value(value)
}

/// Load one file (or `-` for stdin) into a [`Content`] document.
///
/// Files with a `.json` extension are parsed as JSON, everything else as YAML.
pub fn load_file(path: &Path) -> Result<Content, LoadError> {
    let shown = display_path(path);
    let bytes = read_input(path).map_err(|source| LoadError::Io {
        path: shown.clone(),
        source,
    })?;

    let content = if is_json(path) {
        parse_json(&bytes).map_err(|source| LoadError::Json {
            path: shown.clone(),
            source,
        })?
    } else {
        parse(&bytes).map_err(|source| LoadError::Yaml {
            path: shown.clone(),
            source,
        })?
    };

    debug!(
        path = %shown,
        services = content.services.len(),
        service_packages = content.service_packages.len(),
        "loaded document fragment"
    );
    Ok(content)
}

/// Load and merge one or more fragments of a single logical document.
///
/// Services and service packages are concatenated in path order. Other
/// top-level sequences are concatenated too; any other top-level value must
/// be identical in every fragment that sets it.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Content, LoadError> {
    if paths.is_empty() {
        return Err(LoadError::NoInputs);
    }

    let mut merged = Content::default();
    for path in paths {
        let path = path.as_ref();
        let fragment = load_file(path)?;
        merge_into(&mut merged, fragment, &display_path(path))?;
    }
    Ok(merged)
}

fn merge_into(into: &mut Content, fragment: Content, path: &str) -> Result<(), LoadError> {
    into.services.extend(fragment.services);
    into.service_packages.extend(fragment.service_packages);

    for (key, value) in fragment.extra {
        if let Some(existing) = into.extra.get_mut(&key) {
            if !merge_value(existing, value) {
                return Err(LoadError::Conflict {
                    key: describe_key(&key),
                    path: path.to_string(),
                });
            }
            continue;
        }
        into.extra.insert(key, value);
    }
    Ok(())
}

fn merge_value(existing: &mut Value, incoming: Value) -> bool {
    match (existing, incoming) {
        (Value::Sequence(items), Value::Sequence(more)) => {
            items.extend(more);
            true
        }
        (existing, incoming) => *existing == incoming,
    }
}

fn is_blank_yaml(bytes: &[u8]) -> bool {
    String::from_utf8_lossy(bytes).lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn parse_json(bytes: &[u8]) -> Result<Content, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Content::default());
    }
    serde_json::from_slice(bytes)
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path == Path::new(STDIO_PATH) {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(bytes);
    }
    fs::read(path)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn describe_key(key: &Value) -> String {
    match key.as_str() {
        Some(key) => key.to_string(),
        None => format!("{key:?}"),
    }
}

fn display_path(path: &Path) -> String {
    if path == Path::new(STDIO_PATH) {
        return "<stdin>".to_string();
    }
    path.display().to_string()
}
