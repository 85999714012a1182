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
    if sm.style != ParameterStyle::Form {
        return Err(DecodeError::invalid_serialization(param, sm));
    }

    let Some(value) = input.cookies.get(&param.name) else {
        return Ok(Value::Null);
    };
    Ok(parse_primitive(value, &param.schema)?)
}

pub(crate) fn decode_array(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    // Exploded cookie composites are not expressible: each item would need
    // its own Cookie pair, which the header syntax reserves for separate
    // cookies.
    if sm.style != ParameterStyle::Form || sm.explode {
        return Err(DecodeError::invalid_serialization(param, sm));
    }

    let Some(value) = input.cookies.get(&param.name) else {
        return Ok(Value::Null);
    };
    let items: Vec<&str> = value.split(',').collect();
    Ok(parse_array(&items, &param.schema)?)
}

pub(crate) fn decode_object(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    if sm.style != ParameterStyle::Form || sm.explode {
        return Err(DecodeError::invalid_serialization(param, sm));
    }

    let Some(value) = input.cookies.get(&param.name) else {
        return Ok(Value::Null);
    };
    let props = props_from_string(value, ",", ",")?;
    Ok(make_object(&props, &param.schema)?)
}
