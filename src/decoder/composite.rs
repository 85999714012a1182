use std::collections::HashMap;

use serde_json::{Map, Value};

use super::error::{ParseError, ParseErrorKind, PathSegment};
use super::primitive::parse_primitive;

/// Split a serialized object into a `{name -> value}` map.
///
/// With distinct delimiters every `prop_delim`-separated item must be a
/// `name<value_delim>value` pair. With equal delimiters the split sequence
/// alternates names and values and must therefore have even length.
pub fn props_from_string(
    src: &str,
    prop_delim: &str,
    value_delim: &str,
) -> Result<HashMap<String, String>, ParseError> {
    let mut props = HashMap::new();
    if src.is_empty() {
        return Ok(props);
    }
    let pairs: Vec<&str> = src.split(prop_delim).collect();

    if prop_delim == value_delim {
        if pairs.len() % 2 != 0 {
            return Err(invalid_props(src, prop_delim, value_delim));
        }
        for chunk in pairs.chunks(2) {
            props.insert(chunk[0].to_string(), chunk[1].to_string());
        }
        return Ok(props);
    }

    for pair in pairs {
        let prop: Vec<&str> = pair.split(value_delim).collect();
        if prop.len() != 2 {
            return Err(invalid_props(src, prop_delim, value_delim));
        }
        props.insert(prop[0].to_string(), prop[1].to_string());
    }
    Ok(props)
}

fn invalid_props(src: &str, prop_delim: &str, value_delim: &str) -> ParseError {
    ParseError {
        kind: ParseErrorKind::InvalidFormat,
        value: Some(src.to_string()),
        reason: Some(format!(
            "a value must be a list of object's properties in format \"name{value_delim}value\" separated by {prop_delim}"
        )),
        ..Default::default()
    }
}

/// Build a typed object from split-out raw properties.
///
/// Exactly the keys declared in `schema.properties` appear in the result:
/// raw properties with no declared counterpart are discarded, declared
/// properties missing from the raw input decode to `null`. A leaf failure is
/// re-wrapped with the property name as its path segment.
pub fn make_object(props: &HashMap<String, String>, schema: &Value) -> Result<Value, ParseError> {
    let mut obj = Map::new();
    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, prop_schema) in properties {
            let raw = props.get(name).map(String::as_str).unwrap_or_default();
            let value = parse_primitive(raw, prop_schema)
                .map_err(|err| ParseError::with_segment(PathSegment::Property(name.clone()), err))?;
            obj.insert(name.clone(), value);
        }
    }
    Ok(Value::Object(obj))
}

/// Build a typed array by parsing every raw item against `schema.items`.
/// The output length always equals the raw item count; a leaf failure is
/// re-wrapped with the item index as its path segment.
pub fn parse_array<S: AsRef<str>>(raw: &[S], schema: &Value) -> Result<Value, ParseError> {
    let items_schema = schema.get("items").unwrap_or(&Value::Null);
    let mut items = Vec::with_capacity(raw.len());
    for (i, item) in raw.iter().enumerate() {
        let value = parse_primitive(item.as_ref(), items_schema)
            .map_err(|err| ParseError::with_segment(PathSegment::Index(i), err))?;
        items.push(value);
    }
    Ok(Value::Array(items))
}
