//! Payload normalization
//!
//! A raw payload is either a JSON object, which gets re-serialized in
//! canonical form, or anything else, which is carried as-is.

use crate::Result;
use serde_json::{Map, Value};

/// Payload as read from user input
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Input parsed as a JSON object
    Json(Map<String, Value>),
    /// Any other input, kept byte for byte
    Raw(Vec<u8>),
}

impl Payload {
    /// Classify a raw payload.
    ///
    /// Only object-shaped JSON is treated as JSON. Numbers, arrays, strings,
    /// booleans and `null` are valid JSON but stay [`Payload::Raw`], so `42`
    /// is submitted as the two bytes `42`. Input that is not UTF-8 is never
    /// JSON and is kept as-is.
    pub fn parse(raw: impl AsRef<[u8]>) -> Self {
        let raw = raw.as_ref();
        match serde_json::from_slice::<Map<String, Value>>(raw) {
            Ok(map) => Payload::Json(map),
            Err(_) => Payload::Raw(raw.to_vec()),
        }
    }

    /// Whether the input was normalized as a JSON object
    pub fn is_json(&self) -> bool {
        matches!(self, Payload::Json(_))
    }

    /// Bytes to submit
    ///
    /// JSON objects come out compact with keys in sorted order.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Payload::Json(map) => Ok(serde_json::to_vec(&map)?),
            Payload::Raw(raw) => Ok(raw),
        }
    }
}
