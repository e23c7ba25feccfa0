//! Whole-document conversion.
//!
//! ## Pipeline
//!
//! 1. **Validate** — the (from, to) pair must be registered; nothing is read otherwise
//! 2. **Dispatch** — look up the transformer registered for the pair
//! 3. **Load** — read and merge the input fragments
//! 4. **Transform** — build a converted copy; the loaded document is not touched
//! 5. **Write** — serialize the converted document to the output path
//!
//! Output is all-or-nothing: any failure before step 5 leaves the output
//! path untouched.

use std::path::Path;

use decl_file::{load, write_file, Content, Encoding, LoadError, WriteError};
use thiserror::Error;
use tracing::{debug, info};

use crate::conversion_summary::{summarize, ConversionSummary};
use crate::format::Format;
use crate::registry;
use crate::transform::{TransformError, Transformer};

/// Errors returned by document conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The pair is not in the conversion registry.
    #[error("cannot convert from '{from}' to '{to}' format")]
    Unsupported { from: Format, to: Format },
    /// The pair validated but no transformer is bound to it.
    #[error("no transformer registered to convert from '{from}' to '{to}' format")]
    NoTransformer { from: Format, to: Format },
    /// An entity could not be transformed.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// The input document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The output document could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Convert an in-memory document from one format to another.
///
/// Returns a new document; `source` is left as it was.
pub fn convert_content(source: &Content, from: Format, to: Format) -> Result<Content, ConvertError> {
    let transform = dispatch(from, to)?;
    debug!(%from, %to, services = source.services.len(), "converting document");
    Ok(transform(source)?)
}

/// Validate the pair and resolve its transformer.
fn dispatch(from: Format, to: Format) -> Result<Transformer, ConvertError> {
    registry::validate(from, to)?;
    registry::transformer(from, to).ok_or(ConvertError::NoTransformer { from, to })
}

/// Convert one or more input fragments into a single output document.
///
/// # Errors
///
/// Returns [`ConvertError::Unsupported`] (or [`ConvertError::NoTransformer`])
/// before touching any file if the pair cannot be dispatched. Load, transform, and write failures are returned as-is;
/// on any failure before writing, `output` is not created.
pub fn convert_files<P: AsRef<Path>>(
    inputs: &[P],
    output: &Path,
    from: Format,
    to: Format,
    encoding: Encoding,
) -> Result<ConversionSummary, ConvertError> {
    let transform = dispatch(from, to)?;

    let source = load(inputs)?;
    debug!(%from, %to, services = source.services.len(), "converting document");
    let converted = transform(&source)?;
    write_file(&converted, output, encoding)?;

    let summary = summarize(&converted);
    info!(
        %from,
        %to,
        converted_services = source.services.len(),
        service_packages = summary.service_packages,
        output = %output.display(),
        "conversion complete"
    );
    Ok(summary)
}

/// Convert a single YAML input file into a YAML output file.
pub fn convert(
    input: &Path,
    output: &Path,
    from: Format,
    to: Format,
) -> Result<ConversionSummary, ConvertError> {
    convert_files(&[input], output, from, to, Encoding::Yaml)
}
