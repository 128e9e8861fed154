//! JSON API endpoint handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use super::super::AppState;
use super::helpers::bad_request;

/// Health probe reporting the current server time.
pub async fn health() -> Response {
    Json(json!({
        "status": "ok",
        "server_time": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// Echo endpoint that validates and reflects a message.
///
/// The message is trimmed before the length check, and length counts
/// characters rather than bytes so multibyte input is not over-counted.
pub async fn echo(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = payload else {
        return bad_request("request body must be a JSON object");
    };
    let Some(object) = body.as_object() else {
        return bad_request("request body must be a JSON object");
    };
    let Some(message) = object.get("message").and_then(Value::as_str) else {
        return bad_request("message must be a string");
    };

    let trimmed = message.trim();
    let length = trimmed.chars().count();
    let limit = state.settings.max_echo_length;
    if length > limit {
        return bad_request(&format!("message must be {limit} characters or fewer"));
    }

    Json(json!({ "message": trimmed, "length": length })).into_response()
}
