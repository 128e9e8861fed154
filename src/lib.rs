//! basewatch - server-rendered compliance baseline console.
//!
//! Serves the baseline overview as full HTML pages plus htmx-refreshable
//! fragments, alongside a small JSON API. Frontend bundles are resolved
//! through the Vite build manifest, with a dev-server mode for local work.

pub mod cli;
pub mod config;
pub mod models;
pub mod server;
