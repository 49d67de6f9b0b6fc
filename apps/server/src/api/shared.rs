use axum::{body::Bytes, Json};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, ApiResult};
use budget_core::constants::STATUS_SUCCESS;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub fn success() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_SUCCESS,
    })
}

/// Decode a JSON request body regardless of its declared content type.
pub fn decode_json<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))
}

/// Like [`decode_json`], but an empty or whitespace-only body yields `T::default()`.
pub fn decode_optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> ApiResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    decode_json(body)
}

/// Quoted JavaScript string literal for `value`, safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes so the value can never
/// close the element or open a comment.
pub fn script_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
