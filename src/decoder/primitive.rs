use serde_json::Value;

use super::error::{ParseError, ParseErrorKind};

/// Parse a raw string into the primitive type named by a leaf JSON schema.
///
/// An empty string decodes to `null` regardless of type. Integers are
/// deliberately parsed as 64-bit floats so exponent notation is accepted;
/// a schema-level check upstream is expected to reject non-integral values.
///
/// # Panics
///
/// Panics when the schema's `type` is not one of `integer`, `number`,
/// `boolean`, `string` - calling this with a composite schema is API misuse,
/// not a payload error.
pub fn parse_primitive(raw: &str, schema: &Value) -> Result<Value, ParseError> {
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    let ty = schema.get("type").and_then(Value::as_str).unwrap_or_default();
    match ty {
        "integer" => match raw.parse::<f64>() {
            Ok(v) => Ok(Value::from(v)),
            Err(err) => Err(ParseError {
                kind: ParseErrorKind::InvalidInt,
                value: Some(raw.to_string()),
                reason: Some("an invalid integer".to_string()),
                cause: Some(Box::new(err)),
                ..Default::default()
            }),
        },
        "number" => match raw.parse::<f64>() {
            Ok(v) => Ok(Value::from(v)),
            Err(err) => Err(ParseError {
                kind: ParseErrorKind::InvalidNumber,
                value: Some(raw.to_string()),
                reason: Some("an invalid number".to_string()),
                cause: Some(Box::new(err)),
                ..Default::default()
            }),
        },
        "boolean" => match parse_bool_literal(raw) {
            Some(v) => Ok(Value::Bool(v)),
            None => Err(ParseError {
                kind: ParseErrorKind::InvalidBool,
                value: Some(raw.to_string()),
                reason: Some("an invalid boolean".to_string()),
                ..Default::default()
            }),
        },
        "string" => Ok(Value::String(raw.to_string())),
        other => panic!("schema has non primitive type {other:?}"),
    }
}

// The exact literal set of Go's strconv.ParseBool; anything else is invalid.
fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
