use serde::de::{self, DeserializeOwned};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

/// `type` tag of an implementation backed by an embedded gateway service.
pub const GATEWAY_IMPLEMENTATION: &str = "gateway";

/// A declarative configuration document.
///
/// Only services and service packages are modelled. Every other top-level
/// key (`_format_version`, `routes`, `plugins`, `consumers`, ...) is kept in
/// [`Content::extra`] in input order and written back untouched, YAML tags
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    /// Standalone gateway services.
    pub services: Vec<Service>,
    /// Control-plane service packages.
    pub service_packages: Vec<ServicePackage>,
    /// All other top-level keys, in document order.
    pub extra: Mapping,
}

impl Content {
    /// True when the document holds no entities and no other keys.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.service_packages.is_empty() && self.extra.is_empty()
    }
}

// Known keys are lifted out of a raw mapping instead of using
// `#[serde(flatten)]`, which buffers values and cannot carry YAML tags.
impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut extra = Mapping::deserialize(deserializer)?;
        Ok(Content {
            services: take_seq::<_, D::Error>(&mut extra, "services")?,
            service_packages: take_seq::<_, D::Error>(&mut extra, "service_packages")?,
            extra,
        })
    }
}

// Metadata keys (`_format_version`, `_info`, `_workspace`) lead the document,
// followed by services, service packages, then everything else in input order.
impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (meta, rest): (Vec<_>, Vec<_>) = self.extra.iter().partition(|(k, _)| is_meta_key(k));
        let len = meta.len()
            + rest.len()
            + usize::from(!self.services.is_empty())
            + usize::from(!self.service_packages.is_empty());

        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in meta {
            map.serialize_entry(key, value)?;
        }
        if !self.services.is_empty() {
            map.serialize_entry("services", &self.services)?;
        }
        if !self.service_packages.is_empty() {
            map.serialize_entry("service_packages", &self.service_packages)?;
        }
        for (key, value) in rest {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn is_meta_key(key: &Value) -> bool {
    key.as_str().is_some_and(|k| k.starts_with('_'))
}

/// A named network service in gateway format.
///
/// Fields the converter does not care about (host, port, tags, nested
/// routes and plugins, ...) live in `fields` and round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Service {
    pub id: Option<String>,
    pub name: Option<String>,
    pub fields: Mapping,
}

impl Service {
    /// Service name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Look up an opaque field by key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Mapping::deserialize(deserializer)?;
        Ok(Service {
            id: take::<_, D::Error>(&mut fields, "id")?,
            name: take::<_, D::Error>(&mut fields, "name")?,
            fields,
        })
    }
}

impl Serialize for Service {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A control-plane service package: a named group of versioned implementations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePackage {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub versions: Vec<ServiceVersion>,
    pub fields: Mapping,
}

impl<'de> Deserialize<'de> for ServicePackage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Mapping::deserialize(deserializer)?;
        Ok(ServicePackage {
            id: take::<_, D::Error>(&mut fields, "id")?,
            name: take::<_, D::Error>(&mut fields, "name")?,
            description: take::<_, D::Error>(&mut fields, "description")?,
            versions: take_seq::<_, D::Error>(&mut fields, "versions")?,
            fields,
        })
    }
}

impl Serialize for ServicePackage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(name) = &self.name {
            map.serialize_entry("name", name)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if !self.versions.is_empty() {
            map.serialize_entry("versions", &self.versions)?;
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One version of a service package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceVersion {
    pub id: Option<String>,
    pub version: Option<String>,
    pub implementation: Option<Implementation>,
    pub fields: Mapping,
}

impl<'de> Deserialize<'de> for ServiceVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Mapping::deserialize(deserializer)?;
        Ok(ServiceVersion {
            id: take::<_, D::Error>(&mut fields, "id")?,
            version: take::<_, D::Error>(&mut fields, "version")?,
            implementation: take::<_, D::Error>(&mut fields, "implementation")?,
            fields,
        })
    }
}

impl Serialize for ServiceVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(version) = &self.version {
            map.serialize_entry("version", version)?;
        }
        if let Some(implementation) = &self.implementation {
            map.serialize_entry("implementation", implementation)?;
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The technology backing a service version, tagged by `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Implementation {
    /// `type: gateway` with the embedded service under `service`.
    Gateway { service: Box<Service> },
    /// Any other implementation, kept exactly as written.
    Other(Mapping),
}

impl Implementation {
    /// The embedded gateway service, if this is a gateway implementation.
    pub fn service(&self) -> Option<&Service> {
        match self {
            Implementation::Gateway { service } => Some(service),
            Implementation::Other(_) => None,
        }
    }

    /// The `type` tag, if one is set.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Implementation::Gateway { .. } => Some(GATEWAY_IMPLEMENTATION),
            Implementation::Other(raw) => raw.get("type").and_then(Value::as_str),
        }
    }
}

impl<'de> Deserialize<'de> for Implementation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Mapping::deserialize(deserializer)?;
        // Only the exact `{type: gateway, service: {...}}` shape is typed.
        let kind = raw.get("type").and_then(Value::as_str);
        match (kind, raw.get("service")) {
            (Some(GATEWAY_IMPLEMENTATION), Some(service @ Value::Mapping(_))) if raw.len() == 2 => {
                let service = serde_yaml::from_value(service.clone())
                    .map_err(<D::Error as de::Error>::custom)?;
                Ok(Implementation::Gateway {
                    service: Box::new(service),
                })
            }
            _ => Ok(Implementation::Other(raw)),
        }
    }
}

impl Serialize for Implementation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Implementation::Gateway { service } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", GATEWAY_IMPLEMENTATION)?;
                map.serialize_entry("service", service)?;
                map.end()
            }
            Implementation::Other(raw) => raw.serialize(serializer),
        }
    }
}

/// Remove `key` and decode it; absent and null both give `None`.
fn take<T, E>(map: &mut Mapping, key: &str) -> Result<Option<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    match map.shift_remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_yaml::from_value(value)
            .map(Some)
            .map_err(|err| E::custom(format_args!("{key}: {err}"))),
    }
}

fn take_seq<T, E>(map: &mut Mapping, key: &str) -> Result<Vec<T>, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    Ok(take::<Vec<T>, E>(map, key)?.unwrap_or_default())
}
