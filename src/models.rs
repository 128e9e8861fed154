//! Display models for the compliance catalog.

/// Visual tone shared by status pills and status cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Active,
    Warning,
    Idle,
}

impl Tone {
    /// CSS modifier class used by the templates.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Active => "active",
            Tone::Warning => "warning",
            Tone::Idle => "idle",
        }
    }
}

/// Styling variant for a baseline's row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    Primary,
    Warning,
    Neutral,
}

impl ActionVariant {
    /// CSS modifier class used by the templates.
    pub fn css_class(&self) -> &'static str {
        match self {
            ActionVariant::Primary => "primary",
            ActionVariant::Warning => "warning",
            ActionVariant::Neutral => "neutral",
        }
    }
}

/// One tracked compliance baseline.
#[derive(Debug, Clone)]
pub struct Baseline {
    pub name: String,
    pub subtitle: String,
    pub version: String,
    pub scope: String,
    pub last_audit: String,
    pub status: Tone,
    pub status_label: String,
    pub owner: String,
    pub action_label: String,
    pub action_variant: ActionVariant,
}

/// One summary card shown above the baseline table.
#[derive(Debug, Clone)]
pub struct StatusCard {
    pub kicker: String,
    pub value: String,
    pub badge: String,
    pub tone: Tone,
    pub note: String,
}

/// Immutable display data shared by the page and partial handlers.
///
/// Constructed once at startup and handed to the server through its state,
/// so handlers never reach for globals.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub baselines: Vec<Baseline>,
    pub status_cards: Vec<StatusCard>,
}

impl Catalog {
    /// Built-in placeholder dataset.
    pub fn builtin() -> Self {
        Self {
            baselines: vec![
                Baseline {
                    name: "Cloud foundation".into(),
                    subtitle: "CIS aligned, high impact".into(),
                    version: "v3.1".into(),
                    scope: "62 workloads".into(),
                    last_audit: "2024-12-19".into(),
                    status: Tone::Active,
                    status_label: "Active".into(),
                    owner: "Security team".into(),
                    action_label: "Action 1".into(),
                    action_variant: ActionVariant::Primary,
                },
                Baseline {
                    name: "Data privacy".into(),
                    subtitle: "PCI + SOC2 controls".into(),
                    version: "v2.4".into(),
                    scope: "18 systems".into(),
                    last_audit: "2024-11-08".into(),
                    status: Tone::Warning,
                    status_label: "Needs review".into(),
                    owner: "GRC".into(),
                    action_label: "Action 2".into(),
                    action_variant: ActionVariant::Warning,
                },
                Baseline {
                    name: "Endpoint hardening".into(),
                    subtitle: "CIS level 1 desktops".into(),
                    version: "v1.9".into(),
                    scope: "300 endpoints".into(),
                    last_audit: "2025-01-03".into(),
                    status: Tone::Active,
                    status_label: "Active".into(),
                    owner: "IT ops".into(),
                    action_label: "Action 3".into(),
                    action_variant: ActionVariant::Primary,
                },
                Baseline {
                    name: "Third-party access".into(),
                    subtitle: "Vendor onboarding checks".into(),
                    version: "v1.3".into(),
                    scope: "42 vendors".into(),
                    last_audit: "2024-10-21".into(),
                    status: Tone::Idle,
                    status_label: "Paused".into(),
                    owner: "Vendor mgmt".into(),
                    action_label: "Action 4".into(),
                    action_variant: ActionVariant::Neutral,
                },
            ],
            status_cards: vec![
                StatusCard {
                    kicker: "Metric A".into(),
                    value: "18".into(),
                    badge: "OK".into(),
                    tone: Tone::Active,
                    note: "Placeholder note A.".into(),
                },
                StatusCard {
                    kicker: "Metric B".into(),
                    value: "4".into(),
                    badge: "Warn".into(),
                    tone: Tone::Warning,
                    note: "Placeholder note B.".into(),
                },
                StatusCard {
                    kicker: "Metric C".into(),
                    value: "2".into(),
                    badge: "Next".into(),
                    tone: Tone::Idle,
                    note: "Placeholder note C.".into(),
                },
                StatusCard {
                    kicker: "Metric D".into(),
                    value: "1".into(),
                    badge: "New".into(),
                    tone: Tone::Active,
                    note: "Placeholder note D.".into(),
                },
            ],
        }
    }
}
