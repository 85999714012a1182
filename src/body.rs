//! # Body Decoder Registry
//!
//! Process-wide mapping from content type to request-body decoder.
//!
//! ## Overview
//!
//! Request bodies reach validation as raw bytes plus a content type. The
//! registry resolves the content type to a [`BodyDecoder`] and runs it,
//! producing the same `serde_json::Value` union the parameter decoders emit.
//!
//! Preseeded entries:
//! - `application/json` - parsed with serde_json
//! - `plain/text` - the body verbatim as a string (the historical,
//!   non-standard spelling is kept for compatibility)
//! - `text/plain` - same decoder under the IANA spelling
//!
//! ## Thread Safety
//!
//! The registry is a `RwLock<HashMap>` behind a process-wide `Lazy` cell.
//! Lookups take the read lock only long enough to clone the `Arc`'d decoder,
//! so a decoder never runs while the lock is held and concurrent
//! register/unregister calls cannot tear a lookup. Every decode observes
//! some prior consistent state of the mapping.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{debug, info};

use crate::decoder::{ParseError, ParseErrorKind};

/// Decodes a raw request or response body into a typed value.
///
/// An implementation must return a primitive, array, or object `Value`.
pub type BodyDecoder = Arc<dyn Fn(&[u8]) -> anyhow::Result<Value> + Send + Sync>;

static BODY_DECODERS: Lazy<RwLock<HashMap<String, BodyDecoder>>> = Lazy::new(|| {
    let mut decoders: HashMap<String, BodyDecoder> = HashMap::new();
    let text: BodyDecoder =
        Arc::new(|body| Ok(Value::String(String::from_utf8_lossy(body).into_owned())));
    decoders.insert("plain/text".to_string(), Arc::clone(&text));
    decoders.insert("text/plain".to_string(), text);
    decoders.insert(
        "application/json".to_string(),
        Arc::new(|body| Ok(serde_json::from_slice(body)?)),
    );
    RwLock::new(decoders)
});

/// Register a body decoder for a content type, replacing any existing entry.
///
/// # Panics
///
/// Panics when `content_type` is empty; registering under an empty key is
/// API misuse.
pub fn register_body_decoder(
    content_type: &str,
    decoder: impl Fn(&[u8]) -> anyhow::Result<Value> + Send + Sync + 'static,
) {
    if content_type.is_empty() {
        panic!("content type is empty");
    }
    let mut decoders = BODY_DECODERS
        .write()
        .expect("body decoder registry lock poisoned");
    let replaced = decoders
        .insert(content_type.to_string(), Arc::new(decoder))
        .is_some();
    info!(content_type, replaced, "body decoder registered");
}

/// Dissociate a body decoder from a content type.
///
/// Subsequent decode attempts for that type fail with
/// [`ParseErrorKind::UnsupportedFormat`].
///
/// # Panics
///
/// Panics when `content_type` is empty.
pub fn unregister_body_decoder(content_type: &str) {
    if content_type.is_empty() {
        panic!("content type is empty");
    }
    let mut decoders = BODY_DECODERS
        .write()
        .expect("body decoder registry lock poisoned");
    let removed = decoders.remove(content_type).is_some();
    info!(content_type, removed, "body decoder unregistered");
}

/// Decode a raw body using the decoder registered for its content type.
pub fn decode_body(body: &[u8], content_type: &str) -> Result<Value, ParseError> {
    let decoder = {
        let decoders = BODY_DECODERS
            .read()
            .expect("body decoder registry lock poisoned");
        decoders.get(content_type).cloned()
    };
    let Some(decoder) = decoder else {
        return Err(ParseError {
            kind: ParseErrorKind::UnsupportedFormat,
            reason: Some(format!("an unsupported content type {content_type:?}")),
            ..Default::default()
        });
    };
    debug!(content_type, body_len = body.len(), "decoding body");
    decoder(body).map_err(|err| ParseError {
        kind: ParseErrorKind::InvalidFormat,
        cause: Some(err.into()),
        ..Default::default()
    })
}
