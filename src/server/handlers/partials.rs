//! HTML fragment handlers for in-place refresh.
//!
//! These return markup without a document shell so the client can swap
//! them into the pages rendered by the full handlers.

use axum::{extract::State, response::Response};
use chrono::Utc;

use super::super::template_structs::{
    BaselineRow, BaselineRowsTemplate, LastSyncTemplate, StatusCardView, StatusCardsTemplate,
};
use super::super::AppState;
use super::helpers::render;

/// Sync timestamp fragment.
pub async fn last_sync() -> Response {
    let template = LastSyncTemplate {
        last_sync: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };
    render(template)
}

/// Baseline table body fragment.
pub async fn baseline_rows(State(state): State<AppState>) -> Response {
    let template = BaselineRowsTemplate {
        baselines: state
            .catalog
            .baselines
            .iter()
            .map(BaselineRow::from_baseline)
            .collect(),
    };
    render(template)
}

/// Status cards fragment.
pub async fn status_cards(State(state): State<AppState>) -> Response {
    let template = StatusCardsTemplate {
        status_cards: state
            .catalog
            .status_cards
            .iter()
            .map(StatusCardView::from_card)
            .collect(),
    };
    render(template)
}
