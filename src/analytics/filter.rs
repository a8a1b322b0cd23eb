use chrono::{DateTime, Duration, Utc};

use crate::models::{Finding, Priority};

/// Attribute filter for findings listings. Empty fields leave the
/// corresponding attribute unrestricted.
#[derive(Debug, Clone, Default)]
pub struct FindingFilter {
    pub orgs: Vec<String>,
    pub priorities: Vec<u8>,
    pub statuses: Vec<String>,
    pub types: Vec<String>,
}

impl FindingFilter {
    pub fn is_empty(&self) -> bool {
        self.orgs.is_empty()
            && self.priorities.is_empty()
            && self.statuses.is_empty()
            && self.types.is_empty()
    }

    pub fn matches(&self, f: &Finding) -> bool {
        (self.orgs.is_empty() || self.orgs.contains(&f.org_name))
            && (self.priorities.is_empty() || self.priorities.contains(&f.priority.0))
            && (self.statuses.is_empty() || self.statuses.contains(&f.status_name))
            && (self.types.is_empty() || self.types.contains(&f.type_name))
    }

    pub fn apply(&self, findings: &[Finding]) -> Vec<Finding> {
        findings.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

/// Findings created within the last `days` days of `now`, sorted by
/// (priority ascending, created descending). Findings without a created
/// timestamp are excluded.
pub fn recent_findings(findings: &[Finding], now: DateTime<Utc>, days: i64) -> Vec<Finding> {
    let cutoff = now - Duration::days(days);
    let mut recent: Vec<Finding> = findings
        .iter()
        .filter(|f| f.created.map(|c| c >= cutoff).unwrap_or(false))
        .cloned()
        .collect();
    recent.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.created.cmp(&a.created))
    });
    recent
}

/// Priority-1 findings, newest first.
pub fn critical_findings(findings: &[Finding]) -> Vec<Finding> {
    let mut critical: Vec<Finding> = findings
        .iter()
        .filter(|f| f.priority == Priority::CRITICAL)
        .cloned()
        .collect();
    critical.sort_by(|a, b| b.created.cmp(&a.created));
    critical
}
