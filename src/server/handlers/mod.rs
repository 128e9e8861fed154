//! HTTP request handlers for the web server.

mod api;
mod helpers;
mod pages;
mod partials;

// Re-export handlers for use by the router
pub use api::{echo, health};
pub use pages::{index, placeholder, status_page};
pub use partials::{baseline_rows, last_sync, status_cards};
