//! Supported conversions between configuration formats.
//!
//! A single static table both defines which (from, to) pairs are legal and
//! binds each pair to its transformer, so validation and dispatch read the
//! same entries.

use crate::convert::ConvertError;
use crate::format::Format;
use crate::transform::{service_package, Transformer};

/// One legal conversion and the transformer that performs it.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    pub from: Format,
    pub to: Format,
    pub transform: Transformer,
}

static CONVERSIONS: &[Conversion] = &[Conversion {
    from: Format::Gateway,
    to: Format::ControlPlane,
    transform: service_package::gateway_to_control_plane,
}];

/// Every registered conversion.
pub fn conversions() -> &'static [Conversion] {
    CONVERSIONS
}

/// Formats that `from` can be converted into.
pub fn targets(from: Format) -> Vec<Format> {
    CONVERSIONS
        .iter()
        .filter(|c| c.from == from)
        .map(|c| c.to)
        .collect()
}

/// True if converting `from` into `to` is supported.
pub fn is_convertible(from: Format, to: Format) -> bool {
    targets(from).contains(&to)
}

/// Check a conversion pair, producing the standard error for illegal pairs.
pub fn validate(from: Format, to: Format) -> Result<(), ConvertError> {
    if is_convertible(from, to) {
        return Ok(());
    }
    Err(ConvertError::Unsupported { from, to })
}

/// Look up the transformer for a pair.
pub fn transformer(from: Format, to: Format) -> Option<Transformer> {
    CONVERSIONS
        .iter()
        .find(|c| c.from == from && c.to == to)
        .map(|c| c.transform)
}
