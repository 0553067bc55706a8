//! Response normalization.
//!
//! Every operation funnels its HTTP response through [`normalize`]: status
//! `200` is success and anything else is an error, including other 2xx
//! codes. Decoding of the successful body happens afterwards in
//! [`decode_json`] or [`decode_text`].

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ValidationError};

/// Splits a response into success or [`ClientError::HttpStatus`].
///
/// ## Errors
///
/// Returns [`ClientError::HttpStatus`] carrying the numeric status and the
/// raw body (lossily decoded as UTF-8) for every status except exactly 200.
pub fn normalize(status: StatusCode, body: Bytes) -> Result<Bytes, ClientError> {
    if status == StatusCode::OK {
        Ok(body)
    } else {
        Err(ClientError::HttpStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// Decodes a successful JSON body.
///
/// An empty (or whitespace-only) body decodes as JSON `null`, so operations
/// without a declared payload succeed with `serde_json::Value::Null`.
///
/// ## Errors
///
/// Returns [`ValidationError::JsonParse`] if the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a successful plain-text body.
pub fn decode_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
