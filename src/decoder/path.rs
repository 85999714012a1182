use serde_json::Value;

use super::composite::{make_object, parse_array, props_from_string};
use super::error::{DecodeError, ParseError, ParseErrorKind};
use super::primitive::parse_primitive;
use crate::request::RequestInput;
use crate::spec::{ParameterMeta, ParameterStyle, SerializationMethod};

pub(crate) fn decode_primitive(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    let prefix = match sm.style {
        ParameterStyle::Simple => String::new(),
        ParameterStyle::Label => ".".to_string(),
        ParameterStyle::Matrix => format!(";{}=", param.name),
        _ => return Err(DecodeError::invalid_serialization(param, sm)),
    };

    let Some(raw) = raw_segment(param, sm, input) else {
        return Ok(Value::Null);
    };
    let src = cut_prefix(raw, &prefix)?;
    Ok(parse_primitive(src, &param.schema)?)
}

pub(crate) fn decode_array(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    let (prefix, delim) = match (sm.style, sm.explode) {
        (ParameterStyle::Simple, _) => (String::new(), ",".to_string()),
        (ParameterStyle::Label, false) => (".".to_string(), ",".to_string()),
        (ParameterStyle::Label, true) => (".".to_string(), ".".to_string()),
        (ParameterStyle::Matrix, false) => (format!(";{}=", param.name), ",".to_string()),
        (ParameterStyle::Matrix, true) => {
            (format!(";{}=", param.name), format!(";{}=", param.name))
        }
        _ => return Err(DecodeError::invalid_serialization(param, sm)),
    };

    let Some(raw) = raw_segment(param, sm, input) else {
        return Ok(Value::Null);
    };
    let src = cut_prefix(raw, &prefix)?;
    let items: Vec<&str> = src.split(delim.as_str()).collect();
    Ok(parse_array(&items, &param.schema)?)
}

pub(crate) fn decode_object(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    let (prefix, props_delim, value_delim) = match (sm.style, sm.explode) {
        (ParameterStyle::Simple, false) => (String::new(), ",", ","),
        (ParameterStyle::Simple, true) => (String::new(), ",", "="),
        (ParameterStyle::Label, false) => (".".to_string(), ",", ","),
        (ParameterStyle::Label, true) => (".".to_string(), ".", "="),
        (ParameterStyle::Matrix, false) => (format!(";{}=", param.name), ",", ","),
        (ParameterStyle::Matrix, true) => (";".to_string(), ";", "="),
        _ => return Err(DecodeError::invalid_serialization(param, sm)),
    };

    let Some(raw) = raw_segment(param, sm, input) else {
        return Ok(Value::Null);
    };
    let src = cut_prefix(raw, &prefix)?;
    let props = props_from_string(src, props_delim, value_delim)?;
    Ok(make_object(&props, &param.schema)?)
}

/// Look up the raw captured segment for a parameter. Path-template engines
/// record `label` and `matrix` captures under a key that keeps the leading
/// punctuation, so the storage key depends on the style.
fn raw_segment<'a>(
    param: &ParameterMeta,
    sm: SerializationMethod,
    input: &'a RequestInput,
) -> Option<&'a str> {
    let key = match sm.style {
        ParameterStyle::Label => format!(".{}", param.name),
        ParameterStyle::Matrix => format!(";{}", param.name),
        _ => param.name.clone(),
    };
    input
        .path_params
        .get(&key)
        .map(String::as_str)
        .filter(|raw| !raw.is_empty())
}

/// Check that a raw path value carries the prefix its style demands and
/// strip it.
fn cut_prefix<'a>(raw: &'a str, prefix: &str) -> Result<&'a str, ParseError> {
    if prefix.is_empty() {
        return Ok(raw);
    }
    raw.strip_prefix(prefix).ok_or_else(|| ParseError {
        kind: ParseErrorKind::InvalidFormat,
        value: Some(raw.to_string()),
        reason: Some(format!("a value must be prefixed with {prefix:?}")),
        ..Default::default()
    })
}
