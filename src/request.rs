use http::header::COOKIE;
use http::HeaderMap;
use std::collections::HashMap;

/// Read-only view of the parts of an HTTP request the parameter decoders
/// consume. Lives for one request.
///
/// `path_params` is keyed by the storage key an upstream path-template
/// matcher records a captured segment under: the plain parameter name for
/// `simple` style, `.name` for `label`, and `;name` for `matrix` (template
/// engines preserve the leading punctuation in the captured slice).
#[derive(Debug, Default)]
pub struct RequestInput {
    /// Raw captured path segments, keyed by storage key
    pub path_params: HashMap<String, String>,
    /// Query parameters, multi-valued in declaration order
    pub query_params: HashMap<String, Vec<String>>,
    /// Request headers; lookup through `HeaderMap` is case-insensitive
    pub headers: HeaderMap,
    /// Cookies parsed from the Cookie header
    pub cookies: HashMap<String, String>,
}

/// Extract cookies from the `Cookie` header.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|c| {
            c.split(';')
                .filter_map(|pair| {
                    let mut parts = pair.trim().splitn(2, '=');
                    let name = parts.next()?.trim().to_string();
                    let value = parts.next().unwrap_or("").trim().to_string();
                    Some((name, value))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse the query string of a request path into a multi-valued map.
/// Repeated keys keep their values in order of appearance.
pub fn parse_query_params(path: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    if let Some(pos) = path.find('?') {
        for (k, v) in url::form_urlencoded::parse(path[pos + 1..].as_bytes()) {
            params.entry(k.into_owned()).or_default().push(v.into_owned());
        }
    }
    params
}
