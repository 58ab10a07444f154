use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defect {
    pub id: String,
    pub title: String,
    pub component: Option<String>,
    pub severity: String,
    pub status: String,
    pub owner: Option<String>,   // None | "" | "unassigned" | e-mail
    pub release: Option<String>, // None | "" | "TBD" | "unknown" | version
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub recurrence_count: u32,
}

impl Defect {
    pub fn severity_tier(&self) -> Option<SeverityTier> {
        SeverityTier::classify(&self.severity)
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::classify(&self.status)
    }

    pub fn is_missing_component(&self) -> bool {
        self.component.as_deref().map_or(true, str::is_empty)
    }

    pub fn is_missing_owner(&self) -> bool {
        matches!(self.owner.as_deref(), None | Some("") | Some("unassigned"))
    }

    pub fn is_missing_description(&self) -> bool {
        self.description.as_deref().map_or(true, str::is_empty)
    }

    /// Release label usable for scheduling; `None` for the null/empty/TBD/unknown sentinels.
    pub fn scheduled_release(&self) -> Option<&str> {
        match self.release.as_deref() {
            None | Some("") | Some("TBD") | Some("unknown") => None,
            Some(release) => Some(release),
        }
    }

    /// Days between creation and resolution, fractional.
    pub fn resolution_days(&self) -> Option<f64> {
        self.resolved_at
            .map(|resolved| (resolved - self.created_at).num_seconds() as f64 / 86_400.0)
    }
}

/// Normalized severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Critical,
    High,
    Medium,
    Low,
}

impl SeverityTier {
    /// Case-insensitive; "med" is shorthand for medium. Anything else is unmapped.
    pub fn classify(raw: &str) -> Option<SeverityTier> {
        match raw.trim().to_lowercase().as_str() {
            "critical" => Some(SeverityTier::Critical),
            "high" => Some(SeverityTier::High),
            "medium" | "med" => Some(SeverityTier::Medium),
            "low" => Some(SeverityTier::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Open,
    InProgress,
    Closed,
    Resolved,
    Other,
}

impl StatusClass {
    /// Case-insensitive; "in progress", "in-progress" and "in_progress" are the same.
    pub fn classify(raw: &str) -> StatusClass {
        let normalized = raw.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "open" => StatusClass::Open,
            "in progress" => StatusClass::InProgress,
            "closed" => StatusClass::Closed,
            "resolved" => StatusClass::Resolved,
            _ => StatusClass::Other,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, StatusClass::Open | StatusClass::InProgress)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StatusClass::Closed | StatusClass::Resolved)
    }
}
