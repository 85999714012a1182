use serde_json::Value;

use super::composite::{make_object, parse_array, props_from_string};
use super::error::DecodeError;
use super::primitive::parse_primitive;
use crate::request::RequestInput;
use crate::spec::{ParameterMeta, ParameterStyle};

pub(crate) fn decode_primitive(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    if sm.style != ParameterStyle::Simple {
        return Err(DecodeError::invalid_serialization(param, sm));
    }

    // A missing header reads as "", which the primitive parser maps to null.
    let raw = header_value(input, &param.name);
    Ok(parse_primitive(raw, &param.schema)?)
}

pub(crate) fn decode_array(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    if sm.style != ParameterStyle::Simple {
        return Err(DecodeError::invalid_serialization(param, sm));
    }

    let raw = header_value(input, &param.name);
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    let items: Vec<&str> = raw.split(',').collect();
    Ok(parse_array(&items, &param.schema)?)
}

pub(crate) fn decode_object(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    if sm.style != ParameterStyle::Simple {
        return Err(DecodeError::invalid_serialization(param, sm));
    }
    let value_delim = if sm.explode { "=" } else { "," };

    let raw = header_value(input, &param.name);
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    let props = props_from_string(raw, ",", value_delim)?;
    Ok(make_object(&props, &param.schema)?)
}

// HeaderMap lookup is case-insensitive per HTTP rules.
fn header_value<'a>(input: &'a RequestInput, name: &str) -> &'a str {
    input
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
