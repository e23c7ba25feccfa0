//! Document transformers between configuration formats.
//!
//! Each transformer takes the loaded source document by reference and
//! returns a new document in the destination format. The source is never
//! mutated, so callers can keep it around for comparison.

use decl_file::Content;
use thiserror::Error;

use crate::format::Format;

pub mod service_package;

/// Signature shared by every registered document transformer.
pub type Transformer = fn(&Content) -> Result<Content, TransformError>;

/// Errors raised while transforming individual entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A service without a name cannot become a named service package.
    #[error(
        "service with id '{id}' doesn't have a name; all services must be named to convert them from {from} to {to} format"
    )]
    UnnamedService { id: String, from: Format, to: Format },
}
