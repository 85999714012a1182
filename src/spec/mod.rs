//! # Spec Module
//!
//! Parameter descriptors extracted from an OpenAPI 3 operation.
//!
//! ## Overview
//!
//! This module defines the read-only inputs the decoders work from:
//!
//! - [`ParameterMeta`] - a single parameter: name, location, schema, and
//!   serialization attributes
//! - [`ParameterLocation`] - where the parameter lives in the request
//!   (path, query, header, cookie)
//! - [`ParameterStyle`] - the OpenAPI serialization style controlling
//!   delimiter grammar
//! - [`SerializationMethod`] - the resolved (style, explode) pair with
//!   per-location defaults applied
//!
//! Schema nodes are plain `serde_json::Value` JSON Schema fragments; the
//! decoders only read `type`, `items`, and `properties` from them.
//!
//! Conversions from the `oas3` crate's parameter types are provided so
//! descriptors can be built straight from a parsed OpenAPI document.

mod types;

pub use types::{ParameterLocation, ParameterMeta, ParameterStyle, SerializationMethod};
