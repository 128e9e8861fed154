//! Web server for the baseline console.
//!
//! Provides:
//! - Server-rendered pages (overview, status, placeholder)
//! - HTML partials the frontend swaps in without a full page load
//! - A small JSON API (health check, echo)
//! - Frontend bundle delivery under /static

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use assets::{ViteAssets, VITE_ENTRY};
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::models::Catalog;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<Catalog>,
    pub assets: Arc<ViteAssets>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let assets = ViteAssets::from_settings(&settings);
        Self {
            settings: Arc::new(settings),
            catalog: Arc::new(Catalog::builtin()),
            assets: Arc::new(assets),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
