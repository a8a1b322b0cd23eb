use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status name the API uses for findings that have not been worked.
pub const STATUS_OPEN: &str = "Open";

/// Ordinal finding priority as reported by the API: 1 (critical) to 5 (informational).
/// Values outside that range are carried through unchanged and rendered as
/// `Priority N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u8);

impl Priority {
    pub const CRITICAL: Priority = Priority(1);

    pub fn label(&self) -> String {
        match self.0 {
            1 => "Critical".to_string(),
            2 => "High".to_string(),
            3 => "Medium".to_string(),
            4 => "Low".to_string(),
            5 => "Info".to_string(),
            other => format!("Priority {}", other),
        }
    }

    /// Label prefixed with the ordinal, e.g. "P1 Critical". Used for table axes
    /// so rows sort the same way the values do.
    pub fn tag(&self) -> String {
        format!("P{} {}", self.0, self.label())
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A single security finding retrieved from the API. Findings are immutable
/// snapshots; nothing mutates or persists them past the current session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub finding_id: String,
    pub org_id: String,
    pub org_name: String,
    pub name: String,
    pub priority: Priority,
    pub status_name: String,
    pub type_name: String,
    /// Present once an analyst has dispositioned the finding.
    pub resolution_name: Option<String>,
    /// Missing or unparseable timestamps come through as None rather than
    /// failing the whole fetch.
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Finding {
    pub fn is_open(&self) -> bool {
        self.status_name == STATUS_OPEN
    }

    /// Elapsed hours between creation and last modification. None for findings
    /// that are still open or have incomplete timestamps.
    pub fn time_to_close_hours(&self) -> Option<f64> {
        if self.is_open() {
            return None;
        }
        let created = self.created?;
        let modified = self.modified?;
        Some((modified - created).num_seconds() as f64 / 3600.0)
    }

    /// Deep link into the web console for this finding.
    pub fn url(&self, app_base_url: &str) -> String {
        format!(
            "{}/{}/reporting/findings/{}",
            app_base_url, self.org_id, self.finding_id
        )
    }
}
