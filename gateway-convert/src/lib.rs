//! Gateway to control-plane declarative configuration conversion.
//!
//! The same API-management product can run as standalone gateways or under a
//! managed control plane, and the two modes describe services differently.
//! In gateway format a service is a top-level entity; in control-plane format
//! it becomes a *service package* holding versioned *implementations*, each of
//! which wraps a gateway-native service. This library migrates a declarative
//! configuration document from the first shape to the second.
//!
//! # Architecture
//!
//! - [`format`] — Known format identifiers and case-insensitive parsing
//! - [`registry`] — Legal (from, to) pairs, each bound to its transformer
//! - [`transform`] — Entity and document transformers
//!   - [`transform::service_package`] — Service → service package
//! - [`convert`] — Load, transform, and write a whole document
//! - [`conversion_summary`] — Entity counts for the converted document
//! - [`config`] — Optional TOML defaults for the command line
//!
//! Reading, merging, and writing documents is handled by `decl-file`; this
//! crate only decides what a converted document looks like.
//!
//! # Examples
//!
//! ```ignore
//! use std::path::Path;
//!
//! use gateway_convert::convert::convert;
//! use gateway_convert::format::Format;
//!
//! let summary = convert(
//!     Path::new("kong.yaml"),
//!     Path::new("konnect.yaml"),
//!     Format::parse("gateway")?,
//!     Format::parse("control-plane")?,
//! )?;
//! println!("packages: {}", summary.service_packages);
//! ```
//!
//! Only `gateway → control-plane` is supported. The reverse direction and
//! identity conversions are rejected before any file is read.

pub mod config;
pub mod conversion_summary;
pub mod convert;
pub mod format;
pub mod registry;
pub mod transform;
