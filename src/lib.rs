pub mod body;
pub mod decoder;
pub mod request;
pub mod spec;

pub use body::{decode_body, register_body_decoder, unregister_body_decoder, BodyDecoder};
pub use decoder::{decode_parameter, DecodeError, ParseError, ParseErrorKind, PathSegment};
pub use request::RequestInput;
pub use spec::{ParameterLocation, ParameterMeta, ParameterStyle, SerializationMethod};
