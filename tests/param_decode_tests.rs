use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use oasfilter::{
    decode_parameter, DecodeError, ParameterLocation, ParameterMeta, ParameterStyle,
    ParseErrorKind, PathSegment, RequestInput,
};
use serde_json::{json, Value};

fn param(
    name: &str,
    location: ParameterLocation,
    schema: Value,
    style: Option<ParameterStyle>,
    explode: Option<bool>,
) -> ParameterMeta {
    ParameterMeta {
        name: name.to_string(),
        location,
        schema,
        style,
        explode,
    }
}

fn path_input(pairs: &[(&str, &str)]) -> RequestInput {
    RequestInput {
        path_params: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..Default::default()
    }
}

fn query_input(pairs: &[(&str, &[&str])]) -> RequestInput {
    RequestInput {
        query_params: pairs
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect(),
        ..Default::default()
    }
}

fn header_input(name: &str, value: &str) -> RequestInput {
    let mut headers = HeaderMap::new();
    headers.insert(
        name.parse::<HeaderName>().unwrap(),
        HeaderValue::from_str(value).unwrap(),
    );
    RequestInput {
        headers,
        ..Default::default()
    }
}

fn cookie_input(pairs: &[(&str, &str)]) -> RequestInput {
    RequestInput {
        cookies: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..Default::default()
    }
}

fn int_array_schema() -> Value {
    json!({"type": "array", "items": {"type": "integer"}})
}

fn string_array_schema() -> Value {
    json!({"type": "array", "items": {"type": "string"}})
}

fn role_n_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "role": {"type": "string"},
            "n": {"type": "integer"}
        }
    })
}

fn parse_err(result: Result<Value, DecodeError>) -> oasfilter::ParseError {
    match result {
        Err(DecodeError::Parse(err)) => err,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

fn assert_invalid_serialization(result: Result<Value, DecodeError>) {
    match result {
        Err(DecodeError::InvalidSerialization { .. }) => {}
        other => panic!("expected an invalid serialization error, got {other:?}"),
    }
}

// --- path ---

#[test]
fn test_path_matrix_exploded_integer_array() {
    let p = param(
        "id",
        ParameterLocation::Path,
        int_array_schema(),
        Some(ParameterStyle::Matrix),
        Some(true),
    );
    let input = path_input(&[(";id", ";id=3;id=4;id=5")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!([3.0, 4.0, 5.0]));
}

#[test]
fn test_path_matrix_unexploded_integer_array() {
    let p = param(
        "id",
        ParameterLocation::Path,
        int_array_schema(),
        Some(ParameterStyle::Matrix),
        Some(false),
    );
    let input = path_input(&[(";id", ";id=3,4,5")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!([3.0, 4.0, 5.0]));
}

#[test]
fn test_path_simple_primitive() {
    let p = param(
        "id",
        ParameterLocation::Path,
        json!({"type": "string"}),
        None,
        None,
    );
    let input = path_input(&[("id", "abc123")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!("abc123"));
}

#[test]
fn test_path_label_primitive() {
    let p = param(
        "id",
        ParameterLocation::Path,
        json!({"type": "string"}),
        Some(ParameterStyle::Label),
        None,
    );
    let input = path_input(&[(".id", ".blue")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!("blue"));
}

#[test]
fn test_path_matrix_primitive() {
    let p = param(
        "id",
        ParameterLocation::Path,
        json!({"type": "integer"}),
        Some(ParameterStyle::Matrix),
        None,
    );
    let input = path_input(&[(";id", ";id=42")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(42.0));
}

#[test]
fn test_path_simple_array_and_object() {
    let p = param(
        "id",
        ParameterLocation::Path,
        string_array_schema(),
        None,
        None,
    );
    let input = path_input(&[("id", "a,b,c")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(["a", "b", "c"]));

    let p = param("id", ParameterLocation::Path, role_n_schema(), None, None);
    let input = path_input(&[("id", "role,admin,n,7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );

    let p = param(
        "id",
        ParameterLocation::Path,
        role_n_schema(),
        Some(ParameterStyle::Simple),
        Some(true),
    );
    let input = path_input(&[("id", "role=admin,n=7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_path_label_unexploded_object() {
    let p = param(
        "id",
        ParameterLocation::Path,
        role_n_schema(),
        Some(ParameterStyle::Label),
        Some(false),
    );
    let input = path_input(&[(".id", ".role,admin,n,7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_path_label_unexploded_array() {
    let p = param(
        "id",
        ParameterLocation::Path,
        int_array_schema(),
        Some(ParameterStyle::Label),
        Some(false),
    );
    let input = path_input(&[(".id", ".3,4,5")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!([3.0, 4.0, 5.0]));
}

#[test]
fn test_path_label_exploded_variants() {
    let p = param(
        "id",
        ParameterLocation::Path,
        int_array_schema(),
        Some(ParameterStyle::Label),
        Some(true),
    );
    let input = path_input(&[(".id", ".3.4.5")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!([3.0, 4.0, 5.0]));

    let p = param(
        "id",
        ParameterLocation::Path,
        role_n_schema(),
        Some(ParameterStyle::Label),
        Some(true),
    );
    let input = path_input(&[(".id", ".role=admin.n=7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_path_matrix_unexploded_object() {
    let p = param(
        "id",
        ParameterLocation::Path,
        role_n_schema(),
        Some(ParameterStyle::Matrix),
        Some(false),
    );
    let input = path_input(&[(";id", ";id=role,admin,n,7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_path_matrix_exploded_object() {
    let p = param(
        "id",
        ParameterLocation::Path,
        role_n_schema(),
        Some(ParameterStyle::Matrix),
        Some(true),
    );
    let input = path_input(&[(";id", ";role=admin;n=7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_path_missing_prefix_is_invalid_format() {
    let p = param(
        "id",
        ParameterLocation::Path,
        json!({"type": "string"}),
        Some(ParameterStyle::Label),
        None,
    );
    let input = path_input(&[(".id", "foo")]);
    let err = parse_err(decode_parameter(&p, &input));
    assert_eq!(err.kind, ParseErrorKind::InvalidFormat);
    assert_eq!(err.value.as_deref(), Some("foo"));
    assert_eq!(
        err.reason.as_deref(),
        Some("a value must be prefixed with \".\"")
    );
}

#[test]
fn test_path_absent_parameter_is_null() {
    let p = param(
        "id",
        ParameterLocation::Path,
        json!({"type": "integer"}),
        None,
        None,
    );
    assert_eq!(
        decode_parameter(&p, &RequestInput::default()).unwrap(),
        Value::Null
    );

    // An empty captured segment counts as absent too.
    let input = path_input(&[("id", "")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), Value::Null);
}

#[test]
fn test_path_item_error_carries_index_and_value() {
    let p = param(
        "id",
        ParameterLocation::Path,
        int_array_schema(),
        Some(ParameterStyle::Matrix),
        Some(true),
    );
    let input = path_input(&[(";id", ";id=3;id=oops;id=5")]);
    let err = parse_err(decode_parameter(&p, &input));
    assert_eq!(err.full_path(), vec![PathSegment::Index(1)]);
    assert_eq!(err.root().kind, ParseErrorKind::InvalidInt);
    assert_eq!(err.root().value.as_deref(), Some("oops"));
}

#[test]
fn test_path_rejects_query_styles() {
    let p = param(
        "id",
        ParameterLocation::Path,
        json!({"type": "string"}),
        Some(ParameterStyle::Form),
        None,
    );
    let input = path_input(&[("id", "abc")]);
    assert_invalid_serialization(decode_parameter(&p, &input));
}

// --- query ---

#[test]
fn test_query_form_primitive() {
    let p = param(
        "id",
        ParameterLocation::Query,
        json!({"type": "boolean"}),
        None,
        None,
    );
    let input = query_input(&[("id", &["true"])]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(true));
}

#[test]
fn test_query_exploded_array_uses_repeated_values() {
    let p = param("id", ParameterLocation::Query, int_array_schema(), None, None);
    let input = query_input(&[("id", &["3", "4", "5"])]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!([3.0, 4.0, 5.0]));
}

#[test]
fn test_query_unexploded_array_delimiters() {
    let cases = [
        (ParameterStyle::Form, "a,b,c"),
        (ParameterStyle::SpaceDelimited, "a b c"),
        (ParameterStyle::PipeDelimited, "a|b|c"),
    ];
    for (style, raw) in cases {
        let p = param(
            "id",
            ParameterLocation::Query,
            string_array_schema(),
            Some(style),
            Some(false),
        );
        let input = query_input(&[("id", &[raw])]);
        assert_eq!(
            decode_parameter(&p, &input).unwrap(),
            json!(["a", "b", "c"]),
            "style {style}"
        );
    }
}

#[test]
fn test_query_deep_object() {
    let p = param(
        "filter",
        ParameterLocation::Query,
        json!({
            "type": "object",
            "properties": {"a": {"type": "string"}, "b": {"type": "string"}}
        }),
        Some(ParameterStyle::DeepObject),
        Some(true),
    );
    let input = query_input(&[("filter[a]", &["x"]), ("filter[b]", &["y"]), ("other", &["z"])]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"a": "x", "b": "y"})
    );
}

#[test]
fn test_query_deep_object_no_matching_keys_is_null() {
    let p = param(
        "filter",
        ParameterLocation::Query,
        json!({"type": "object", "properties": {"a": {"type": "string"}}}),
        Some(ParameterStyle::DeepObject),
        Some(true),
    );
    let input = query_input(&[("other", &["z"])]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), Value::Null);
}

#[test]
fn test_query_form_exploded_object_reads_all_keys() {
    let p = param("id", ParameterLocation::Query, role_n_schema(), None, None);
    let input = query_input(&[("role", &["admin"]), ("n", &["7"]), ("other", &["x"])]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_query_form_unexploded_object() {
    let p = param(
        "id",
        ParameterLocation::Query,
        role_n_schema(),
        None,
        Some(false),
    );
    let input = query_input(&[("id", &["role,admin,n,7"])]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_query_form_unexploded_object_odd_split() {
    let p = param(
        "id",
        ParameterLocation::Query,
        role_n_schema(),
        None,
        Some(false),
    );
    let input = query_input(&[("id", &["role,admin,n"])]);
    let err = parse_err(decode_parameter(&p, &input));
    assert_eq!(err.kind, ParseErrorKind::InvalidFormat);
}

#[test]
fn test_query_absent_parameter_is_null() {
    let p = param("id", ParameterLocation::Query, int_array_schema(), None, None);
    assert_eq!(
        decode_parameter(&p, &RequestInput::default()).unwrap(),
        Value::Null
    );
}

#[test]
fn test_query_invalid_serializations() {
    let p = param(
        "id",
        ParameterLocation::Query,
        int_array_schema(),
        Some(ParameterStyle::DeepObject),
        Some(true),
    );
    let input = query_input(&[("id", &["3"])]);
    assert_invalid_serialization(decode_parameter(&p, &input));

    let p = param(
        "id",
        ParameterLocation::Query,
        json!({"type": "string"}),
        Some(ParameterStyle::PipeDelimited),
        Some(false),
    );
    assert_invalid_serialization(decode_parameter(&p, &input));
}

// --- header ---

#[test]
fn test_header_simple_primitive_case_insensitive() {
    let p = param(
        "X-Rate-Limit",
        ParameterLocation::Header,
        json!({"type": "integer"}),
        None,
        None,
    );
    let input = header_input("x-rate-limit", "100");
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(100.0));
}

#[test]
fn test_header_simple_array() {
    let p = param(
        "X-Tags",
        ParameterLocation::Header,
        string_array_schema(),
        None,
        None,
    );
    let input = header_input("X-Tags", "a,b,c");
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(["a", "b", "c"]));
}

#[test]
fn test_header_exploded_object() {
    let p = param(
        "X-P",
        ParameterLocation::Header,
        json!({"type": "object", "properties": {"k": {"type": "string"}}}),
        Some(ParameterStyle::Simple),
        Some(true),
    );
    let input = header_input("X-P", "k=v");
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!({"k": "v"}));
}

#[test]
fn test_header_unexploded_object() {
    let p = param(
        "X-P",
        ParameterLocation::Header,
        role_n_schema(),
        None,
        Some(false),
    );
    let input = header_input("X-P", "role,admin,n,7");
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_header_absent_is_null() {
    let p = param(
        "X-Missing",
        ParameterLocation::Header,
        string_array_schema(),
        None,
        None,
    );
    assert_eq!(
        decode_parameter(&p, &RequestInput::default()).unwrap(),
        Value::Null
    );
}

#[test]
fn test_header_rejects_non_simple_styles() {
    let p = param(
        "X-P",
        ParameterLocation::Header,
        json!({"type": "string"}),
        Some(ParameterStyle::Form),
        None,
    );
    let input = header_input("X-P", "v");
    assert_invalid_serialization(decode_parameter(&p, &input));
}

// --- cookie ---

#[test]
fn test_cookie_form_primitive() {
    let p = param(
        "id",
        ParameterLocation::Cookie,
        json!({"type": "number"}),
        None,
        None,
    );
    let input = cookie_input(&[("id", "2.5")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(2.5));
}

#[test]
fn test_cookie_unexploded_array() {
    let p = param(
        "id",
        ParameterLocation::Cookie,
        string_array_schema(),
        None,
        Some(false),
    );
    let input = cookie_input(&[("id", "a,b,c")]);
    assert_eq!(decode_parameter(&p, &input).unwrap(), json!(["a", "b", "c"]));
}

#[test]
fn test_cookie_unexploded_object() {
    let p = param(
        "id",
        ParameterLocation::Cookie,
        role_n_schema(),
        None,
        Some(false),
    );
    let input = cookie_input(&[("id", "role,admin,n,7")]);
    assert_eq!(
        decode_parameter(&p, &input).unwrap(),
        json!({"role": "admin", "n": 7.0})
    );
}

#[test]
fn test_cookie_exploded_composites_are_invalid() {
    // form/explode=true is the cookie default, which composites cannot use.
    let p = param(
        "id",
        ParameterLocation::Cookie,
        string_array_schema(),
        None,
        None,
    );
    let input = cookie_input(&[("id", "a,b,c")]);
    assert_invalid_serialization(decode_parameter(&p, &input));

    let p = param("id", ParameterLocation::Cookie, role_n_schema(), None, None);
    assert_invalid_serialization(decode_parameter(&p, &input));
}

#[test]
fn test_cookie_absent_is_null() {
    let p = param(
        "id",
        ParameterLocation::Cookie,
        json!({"type": "string"}),
        None,
        None,
    );
    assert_eq!(
        decode_parameter(&p, &RequestInput::default()).unwrap(),
        Value::Null
    );
}

// --- error surface ---

#[test]
fn test_invalid_serialization_message() {
    let p = param(
        "id",
        ParameterLocation::Query,
        int_array_schema(),
        Some(ParameterStyle::DeepObject),
        Some(true),
    );
    let err = decode_parameter(&p, &query_input(&[("id", &["3"])])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "query parameter \"id\" has an invalid serialization method: style=\"deepObject\", explode=true"
    );
}

#[test]
fn test_wrapped_parse_error_rendering() {
    let p = param(
        "id",
        ParameterLocation::Path,
        int_array_schema(),
        Some(ParameterStyle::Matrix),
        Some(true),
    );
    let input = path_input(&[(";id", ";id=3;id=oops;id=5")]);
    let err = parse_err(decode_parameter(&p, &input));
    let rendered = err.to_string();
    assert!(rendered.starts_with("path [1]: "), "got {rendered:?}");
    assert!(rendered.contains("an invalid integer"), "got {rendered:?}");
}
