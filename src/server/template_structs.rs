//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::models::{Baseline, StatusCard};

/// Helper struct for baseline table rows.
#[derive(Clone)]
pub struct BaselineRow {
    pub name: String,
    pub slug: String,
    pub subtitle: String,
    pub version: String,
    pub scope: String,
    pub last_audit: String,
    pub status_class: String,
    pub status_label: String,
    pub owner: String,
    pub action_label: String,
    pub action_class: String,
}

/// Helper struct for status summary cards.
#[derive(Clone)]
pub struct StatusCardView {
    pub kicker: String,
    pub value: String,
    pub badge: String,
    pub tone_class: String,
    pub note: String,
}

/// Overview page with the baseline table and status cards.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub section: &'static str,
    pub dev_mode: bool,
    pub vite_css: String,
    pub vite_js: String,
    pub baselines: Vec<BaselineRow>,
    pub status_cards: Vec<StatusCardView>,
    pub last_sync: String,
}

/// Status page with the API console.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate<'a> {
    pub title: &'a str,
    pub section: &'static str,
    pub dev_mode: bool,
    pub vite_css: String,
    pub vite_js: String,
}

/// Placeholder page for routes that are not built yet.
#[derive(Template)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub title: String,
    pub section: &'static str,
    pub dev_mode: bool,
    pub vite_css: String,
    pub vite_js: String,
}

/// Last-sync timestamp fragment.
#[derive(Template)]
#[template(path = "partials/last_sync.html")]
pub struct LastSyncTemplate {
    pub last_sync: String,
}

/// Baseline table body fragment.
#[derive(Template)]
#[template(path = "partials/baseline_rows.html")]
pub struct BaselineRowsTemplate {
    pub baselines: Vec<BaselineRow>,
}

/// Status cards fragment.
#[derive(Template)]
#[template(path = "partials/status_cards.html")]
pub struct StatusCardsTemplate {
    pub status_cards: Vec<StatusCardView>,
}

// Helper implementations for converting data to template structs

impl BaselineRow {
    pub fn from_baseline(baseline: &Baseline) -> Self {
        Self {
            name: baseline.name.clone(),
            slug: slugify(&baseline.name),
            subtitle: baseline.subtitle.clone(),
            version: baseline.version.clone(),
            scope: baseline.scope.clone(),
            last_audit: baseline.last_audit.clone(),
            status_class: baseline.status.css_class().to_string(),
            status_label: baseline.status_label.clone(),
            owner: baseline.owner.clone(),
            action_label: baseline.action_label.clone(),
            action_class: baseline.action_variant.css_class().to_string(),
        }
    }
}

impl StatusCardView {
    pub fn from_card(card: &StatusCard) -> Self {
        Self {
            kicker: card.kicker.clone(),
            value: card.value.clone(),
            badge: card.badge.clone(),
            tone_class: card.tone.css_class().to_string(),
            note: card.note.clone(),
        }
    }
}

/// Lowercase a display name into a URL slug.
fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
