//! # Decoder Module
//!
//! Parameter decoding for OpenAPI 3 request validation.
//!
//! ## Overview
//!
//! Given a [`ParameterMeta`] descriptor and a [`RequestInput`] view of the
//! HTTP request, [`decode_parameter`] extracts the raw serialized value from
//! the right location, interprets it under the parameter's (style, explode)
//! serialization method, and produces a typed `serde_json::Value`:
//!
//! - `null` when the parameter is absent from the request
//! - a primitive (number, boolean, or string)
//! - an array of primitives
//! - an object mapping declared property names to primitives
//!
//! ## Dispatch
//!
//! Each location (path, query, header, cookie) is a table of three pure
//! handler functions, one per shape. The dispatcher picks the table by the
//! parameter's location and the handler by the schema's `type`; everything
//! that is not `array` or `object` decodes as a primitive.
//!
//! ## Errors
//!
//! Payload faults surface as [`ParseError`] with a typed kind, the failure
//! path inside composites, and the offending raw value. A (style, explode)
//! pair the location cannot express is a fault in the API description and
//! surfaces as [`DecodeError::InvalidSerialization`] instead.

mod composite;
mod cookie;
mod error;
mod header;
mod path;
mod primitive;
mod query;

pub use composite::{make_object, parse_array, props_from_string};
pub use error::{DecodeError, ParseError, ParseErrorKind, PathSegment};
pub use primitive::parse_primitive;

use serde_json::Value;
use tracing::debug;

use crate::request::RequestInput;
use crate::spec::{ParameterLocation, ParameterMeta};

type DecodeFn = fn(&ParameterMeta, &RequestInput) -> Result<Value, DecodeError>;

/// Per-location handler table, one entry per data shape.
struct LocationHandlers {
    primitive: DecodeFn,
    array: DecodeFn,
    object: DecodeFn,
}

const PATH: LocationHandlers = LocationHandlers {
    primitive: path::decode_primitive,
    array: path::decode_array,
    object: path::decode_object,
};

const QUERY: LocationHandlers = LocationHandlers {
    primitive: query::decode_primitive,
    array: query::decode_array,
    object: query::decode_object,
};

const HEADER: LocationHandlers = LocationHandlers {
    primitive: header::decode_primitive,
    array: header::decode_array,
    object: header::decode_object,
};

const COOKIE: LocationHandlers = LocationHandlers {
    primitive: cookie::decode_primitive,
    array: cookie::decode_array,
    object: cookie::decode_object,
};

/// Decode the value of an operation's parameter from an HTTP request.
///
/// Returns `Value::Null` when the request does not carry the parameter;
/// absence is never an error. Payload faults come back as
/// [`DecodeError::Parse`].
pub fn decode_parameter(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let handlers = match param.location {
        ParameterLocation::Path => &PATH,
        ParameterLocation::Query => &QUERY,
        ParameterLocation::Header => &HEADER,
        ParameterLocation::Cookie => &COOKIE,
    };

    let shape = param
        .schema
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    debug!(
        name = %param.name,
        location = %param.location,
        shape = shape,
        "decoding parameter"
    );
    match shape {
        "array" => (handlers.array)(param, input),
        "object" => (handlers.object)(param, input),
        _ => (handlers.primitive)(param, input),
    }
}
