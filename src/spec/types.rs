use serde_json::Value;

/// Location where a parameter can be found in an HTTP request
///
/// Corresponds to the OpenAPI `in` field for parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    /// Path parameter (e.g., `/users/{id}`)
    Path,
    /// Query string parameter (e.g., `?limit=10`)
    Query,
    /// HTTP header parameter
    Header,
    /// Cookie parameter
    Cookie,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Cookie => write!(f, "cookie"),
        }
    }
}

/// Serialization style for parameters as defined by OpenAPI
///
/// Determines how arrays and objects are serialized in different parameter
/// locations. See: https://spec.openapis.org/oas/v3.1.0#style-values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterStyle {
    /// Path-style parameters (e.g., `;color=blue;color=green`)
    Matrix,
    /// Label-style parameters with dot prefix (e.g., `.blue.green`)
    Label,
    /// Form-style parameters (default for query/cookie, e.g., `color=blue&color=green`)
    Form,
    /// Simple-style parameters (default for path/header, e.g., `blue,green`)
    Simple,
    /// Space-delimited parameters (e.g., `blue green`)
    SpaceDelimited,
    /// Pipe-delimited parameters (e.g., `blue|green`)
    PipeDelimited,
    /// Deep object parameters for complex objects (e.g., `color[R]=100&color[G]=200`)
    DeepObject,
}

/// Formats the style as its OpenAPI wire name (`matrix`, `deepObject`, ...),
/// which is what serialization error messages quote.
impl std::fmt::Display for ParameterStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParameterStyle::Matrix => "matrix",
            ParameterStyle::Label => "label",
            ParameterStyle::Form => "form",
            ParameterStyle::Simple => "simple",
            ParameterStyle::SpaceDelimited => "spaceDelimited",
            ParameterStyle::PipeDelimited => "pipeDelimited",
            ParameterStyle::DeepObject => "deepObject",
        };
        write!(f, "{s}")
    }
}

/// Convert from `oas3` crate's `ParameterStyle` to `oasfilter`'s enum
impl From<oas3::spec::ParameterStyle> for ParameterStyle {
    fn from(style: oas3::spec::ParameterStyle) -> Self {
        use oas3::spec::ParameterStyle as PS;
        match style {
            PS::Matrix => ParameterStyle::Matrix,
            PS::Label => ParameterStyle::Label,
            PS::Form => ParameterStyle::Form,
            PS::Simple => ParameterStyle::Simple,
            PS::SpaceDelimited => ParameterStyle::SpaceDelimited,
            PS::PipeDelimited => ParameterStyle::PipeDelimited,
            PS::DeepObject => ParameterStyle::DeepObject,
        }
    }
}

/// Convert from `oas3` crate's `ParameterIn` to `oasfilter`'s enum
impl From<oas3::spec::ParameterIn> for ParameterLocation {
    fn from(loc: oas3::spec::ParameterIn) -> Self {
        match loc {
            oas3::spec::ParameterIn::Path => ParameterLocation::Path,
            oas3::spec::ParameterIn::Query => ParameterLocation::Query,
            oas3::spec::ParameterIn::Header => ParameterLocation::Header,
            oas3::spec::ParameterIn::Cookie => ParameterLocation::Cookie,
        }
    }
}

/// The resolved (style, explode) pair governing a parameter's delimiter
/// grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationMethod {
    pub style: ParameterStyle,
    pub explode: bool,
}

/// Metadata for a single parameter in an API operation
///
/// Extracted from OpenAPI parameter definitions. Descriptors are read-only
/// inputs to the decoders and outlive any individual decoding call.
#[derive(Debug, Clone)]
pub struct ParameterMeta {
    /// Parameter name
    pub name: String,
    /// Where the parameter appears in the request
    pub location: ParameterLocation,
    /// JSON Schema fragment describing the parameter's shape
    pub schema: Value,
    /// Serialization style (how arrays/objects are encoded)
    pub style: Option<ParameterStyle>,
    /// Whether to use exploded format for arrays/objects
    pub explode: Option<bool>,
}

impl ParameterMeta {
    /// Resolve the serialization method, applying OpenAPI defaults where the
    /// document left style or explode unset.
    ///
    /// Defaults per location: path and header use `simple`, query and cookie
    /// use `form`. `explode` defaults to true exactly when the resolved style
    /// is `form`.
    pub fn serialization_method(&self) -> SerializationMethod {
        let style = self.style.unwrap_or(match self.location {
            ParameterLocation::Path | ParameterLocation::Header => ParameterStyle::Simple,
            ParameterLocation::Query | ParameterLocation::Cookie => ParameterStyle::Form,
        });
        let explode = self.explode.unwrap_or(style == ParameterStyle::Form);
        SerializationMethod { style, explode }
    }
}
