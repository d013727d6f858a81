use actix_web::{HttpMessage, HttpRequest};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonBodyError {
    #[error("malformed JSON body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("JSON body must be an object or an array")]
    NotObjectOrArray,
}

/// Reads a request body the way a strict JSON body parser does and returns
/// its top-level fields.
///
/// Bodies sent with a non-JSON content type are not read at all, and an
/// empty body counts as `{}`; both yield no fields. A body without a
/// content type is read as JSON. A top-level array is accepted but has no
/// named fields. Any other top-level value is an error.
pub fn read_json_object(req: &HttpRequest, body: &[u8]) -> Result<Map<String, Value>, JsonBodyError> {
    if !is_json(req) || body.is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(fields) => Ok(fields),
        Value::Array(_) => Ok(Map::new()),
        _ => Err(JsonBodyError::NotObjectOrArray),
    }
}

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => mime.essence_str() == "application/json",
        Ok(None) => true,
        Err(_) => false,
    }
}
