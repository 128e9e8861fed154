//! Full page handlers.

use axum::{
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;

use super::super::assets::VITE_ENTRY;
use super::super::template_structs::{
    BaselineRow, IndexTemplate, PlaceholderTemplate, StatusCardView, StatusTemplate,
};
use super::super::AppState;
use super::helpers::{render, title_from_slug};

/// Overview page with the baseline table and status cards.
pub async fn index(State(state): State<AppState>) -> Response {
    let template = IndexTemplate {
        title: "Overview",
        section: "overview",
        dev_mode: state.settings.vite_dev,
        vite_css: state.assets.css_tags(VITE_ENTRY),
        vite_js: state.assets.script_tags(VITE_ENTRY),
        baselines: state
            .catalog
            .baselines
            .iter()
            .map(BaselineRow::from_baseline)
            .collect(),
        status_cards: state
            .catalog
            .status_cards
            .iter()
            .map(StatusCardView::from_card)
            .collect(),
        last_sync: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };
    render(template)
}

/// Status page with the API console.
pub async fn status_page(State(state): State<AppState>) -> Response {
    let template = StatusTemplate {
        title: "Status",
        section: "status",
        dev_mode: state.settings.vite_dev,
        vite_css: state.assets.css_tags(VITE_ENTRY),
        vite_js: state.assets.script_tags(VITE_ENTRY),
    };
    render(template)
}

/// Placeholder page whose title derives from the URL slug.
pub async fn placeholder(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let template = PlaceholderTemplate {
        title: title_from_slug(&slug),
        section: "placeholder",
        dev_mode: state.settings.vite_dev,
        vite_css: state.assets.css_tags(VITE_ENTRY),
        vite_js: state.assets.script_tags(VITE_ENTRY),
    };
    render(template)
}
