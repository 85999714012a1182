use std::collections::HashMap;

use regex::Regex;
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

    let Some(values) = raw_values(param, input) else {
        return Ok(Value::Null);
    };
    Ok(parse_primitive(&values[0], &param.schema)?)
}

pub(crate) fn decode_array(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    if sm.style == ParameterStyle::DeepObject {
        return Err(DecodeError::invalid_serialization(param, sm));
    }

    let Some(values) = raw_values(param, input) else {
        return Ok(Value::Null);
    };
    if sm.explode {
        // Exploded arrays repeat the key; the raw multi-value list is
        // already the item list.
        return Ok(parse_array(values, &param.schema)?);
    }
    let delim = match sm.style {
        ParameterStyle::Form => ",",
        ParameterStyle::SpaceDelimited => " ",
        ParameterStyle::PipeDelimited => "|",
        _ => return Err(DecodeError::invalid_serialization(param, sm)),
    };
    let items: Vec<&str> = values[0].split(delim).collect();
    Ok(parse_array(&items, &param.schema)?)
}

pub(crate) fn decode_object(
    param: &ParameterMeta,
    input: &RequestInput,
) -> Result<Value, DecodeError> {
    let sm = param.serialization_method();
    let props: HashMap<String, String> = match sm.style {
        ParameterStyle::Form => {
            if input.query_params.is_empty() {
                return Ok(Value::Null);
            }
            if sm.explode {
                // Property names come from the query keys themselves, not
                // from the parameter name; undeclared ones are dropped by
                // make_object.
                input
                    .query_params
                    .iter()
                    .filter_map(|(key, values)| {
                        values.first().map(|v| (key.clone(), v.clone()))
                    })
                    .collect()
            } else {
                let Some(values) = raw_values(param, input) else {
                    return Ok(Value::Null);
                };
                props_from_string(&values[0], ",", ",")?
            }
        }
        ParameterStyle::DeepObject => {
            let pattern = format!(r"{}\[(.+?)\]", regex::escape(&param.name));
            let re = Regex::new(&pattern).expect("deepObject property pattern is valid");
            let mut props = HashMap::new();
            for (key, values) in &input.query_params {
                let Some(caps) = re.captures(key) else {
                    // Key is not encoded by the deepObject rules, skip it.
                    continue;
                };
                if let Some(value) = values.first() {
                    props.insert(caps[1].to_string(), value.clone());
                }
            }
            if props.is_empty() {
                return Ok(Value::Null);
            }
            props
        }
        _ => return Err(DecodeError::invalid_serialization(param, sm)),
    };
    Ok(make_object(&props, &param.schema)?)
}

fn raw_values<'a>(param: &ParameterMeta, input: &'a RequestInput) -> Option<&'a Vec<String>> {
    input
        .query_params
        .get(&param.name)
        .filter(|values| !values.is_empty())
}
