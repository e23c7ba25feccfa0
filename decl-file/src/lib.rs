//! Declarative gateway configuration documents: model, loading, and writing.
//!
//! This crate knows the shape of a configuration document but nothing about
//! converting between formats. Services and service packages are typed;
//! everything else is carried as ordered YAML values so it round-trips.

pub mod content;
pub mod id;
pub mod reader;
pub mod writer;

pub use content::{Content, Implementation, Service, ServicePackage, ServiceVersion};
pub use id::new_id;
pub use reader::{load, load_file, parse, LoadError, STDIO_PATH};
pub use serde_yaml::{Mapping, Value};
pub use writer::{write, write_file, Encoding, WriteError};
