//! Helper functions shared by handlers.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Render a template, mapping failures to a 500 with the render error.
pub fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// JSON error body for rejected API requests.
pub fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Build a page title from a URL slug: hyphens become spaces and each
/// word is capitalized.
pub fn title_from_slug(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut at_word_start = true;
    for ch in slug.chars() {
        if ch == '-' {
            title.push(' ');
            at_word_start = true;
        } else if ch.is_alphabetic() {
            if at_word_start {
                title.extend(ch.to_uppercase());
            } else {
                title.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            title.push(ch);
            at_word_start = true;
        }
    }
    title
}
