use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A declarative configuration schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    /// Standalone gateway schema, where services are top-level entities.
    Gateway,
    /// Managed control-plane schema, where services are wrapped in packages.
    ControlPlane,
}

/// Error returned when text does not name a known [`Format`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid format: '{0}'")]
    Invalid(String),
}

impl Format {
    /// Every known format, in display order.
    pub const ALL: [Format; 2] = [Format::Gateway, Format::ControlPlane];

    /// Canonical lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Gateway => "gateway",
            Format::ControlPlane => "control-plane",
        }
    }

    /// Older spellings still accepted on input.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Format::Gateway => &["kong-gateway"],
            Format::ControlPlane => &["konnect"],
        }
    }

    /// Parse a format identifier, ignoring ASCII case.
    pub fn parse(text: &str) -> Result<Format, FormatError> {
        Format::ALL
            .into_iter()
            .find(|format| {
                format.as_str().eq_ignore_ascii_case(text)
                    || format
                        .aliases()
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(text))
            })
            .ok_or_else(|| FormatError::Invalid(text.to_string()))
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::parse(s)
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Format::parse(&raw).map_err(serde::de::Error::custom)
    }
}
