use std::error::Error as StdError;
use std::fmt;

use crate::spec::{ParameterMeta, SerializationMethod};

/// Kind of a [`ParseError`]. Simplifies programmatic comparison of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseErrorKind {
    /// An untyped parsing error
    #[default]
    Other,
    /// A value has an unsupported format (no decoder for the content type)
    UnsupportedFormat,
    /// A value does not conform to the format required by a serialization
    /// method
    InvalidFormat,
    /// A value is an invalid integer
    InvalidInt,
    /// A value is an invalid number
    InvalidNumber,
    /// A value is an invalid boolean
    InvalidBool,
}

/// One step of the location of a failure inside a composite value: either a
/// property name or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Property(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Property(name) => write!(f, "{name}"),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Structured error produced while parsing an operation's parameters or
/// request body.
///
/// Composite builders wrap leaf errors one level at a time: the outer error
/// carries the positional segment and keeps the inner error as its cause, so
/// the full failure path stays reconstructable without deep recursion.
#[derive(Debug, Default)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Position of the failure inside a composite value, outermost first
    pub path: Vec<PathSegment>,
    /// The offending raw value
    pub value: Option<String>,
    pub reason: Option<String>,
    /// Wrapped underlying error, possibly itself a `ParseError`
    pub cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        ParseError {
            kind,
            ..Default::default()
        }
    }

    /// Error for a raw value that does not conform to the serialization
    /// grammar.
    pub fn invalid_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidFormat,
            value: Some(value.into()),
            reason: Some(reason.into()),
            ..Default::default()
        }
    }

    /// Wrap `inner` with one positional segment, keeping it as the cause.
    pub fn with_segment(segment: PathSegment, inner: ParseError) -> Self {
        ParseError {
            kind: ParseErrorKind::Other,
            path: vec![segment],
            cause: Some(Box::new(inner)),
            ..Default::default()
        }
    }

    /// The innermost `ParseError` in the cause chain. This is where the
    /// typed kind and offending value of a wrapped leaf failure live.
    pub fn root(&self) -> &ParseError {
        let mut err = self;
        while let Some(cause) = err.parse_cause() {
            err = cause;
        }
        err
    }

    /// Full failure path accumulated across the cause chain, outermost
    /// segment first.
    pub fn full_path(&self) -> Vec<PathSegment> {
        let mut segments = self.path.clone();
        if let Some(inner) = self.parse_cause() {
            segments.extend(inner.full_path());
        }
        segments
    }

    fn parse_cause(&self) -> Option<&ParseError> {
        self.cause
            .as_deref()
            .and_then(|c| c.downcast_ref::<ParseError>())
    }
}

/// Renders the present attributes in the order path, value, reason, cause,
/// joined by `": "`.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut msg: Vec<String> = Vec::new();
        if !self.path.is_empty() {
            let segments: Vec<String> = self.path.iter().map(|s| s.to_string()).collect();
            msg.push(format!("path [{}]", segments.join(" ")));
        }
        if let Some(value) = &self.value {
            msg.push(format!("value {value}"));
        }
        if let Some(reason) = &self.reason {
            msg.push(reason.clone());
        }
        if let Some(cause) = &self.cause {
            msg.push(cause.to_string());
        }
        f.write_str(&msg.join(": "))
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|c| &**c as &(dyn StdError + 'static))
    }
}

/// Error returned by the parameter decoders.
///
/// Payload faults carry a structured [`ParseError`]; a serialization method
/// the parameter's location does not support is a fault in the API
/// description itself and gets its own variant.
#[derive(Debug)]
pub enum DecodeError {
    /// The (style, explode) pair is not valid for the parameter's location
    InvalidSerialization {
        location: crate::spec::ParameterLocation,
        name: String,
        style: crate::spec::ParameterStyle,
        explode: bool,
    },
    /// The raw value does not parse under the declared serialization method
    Parse(ParseError),
}

impl DecodeError {
    pub(crate) fn invalid_serialization(param: &ParameterMeta, sm: SerializationMethod) -> Self {
        DecodeError::InvalidSerialization {
            location: param.location,
            name: param.name.clone(),
            style: sm.style,
            explode: sm.explode,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidSerialization {
                location,
                name,
                style,
                explode,
            } => write!(
                f,
                "{location} parameter {name:?} has an invalid serialization method: style=\"{style}\", explode={explode}"
            ),
            DecodeError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            DecodeError::InvalidSerialization { .. } => None,
            DecodeError::Parse(err) => Some(err),
        }
    }
}

impl From<ParseError> for DecodeError {
    fn from(err: ParseError) -> Self {
        DecodeError::Parse(err)
    }
}
