use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Finding, Priority};

/// Resolution name the API assigns to dispositioned-as-noise findings.
pub const RESOLUTION_FALSE_POSITIVE: &str = "False Positive";
/// Resolution name for findings confirmed as real.
pub const RESOLUTION_VALID: &str = "Valid";

/// Mean/median/max of time-to-close over closed findings, in hours.
/// All three are 0.0 (never NaN) when no finding is closed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TimeToCloseSummary {
    pub mean_hours: f64,
    pub median_hours: f64,
    pub max_hours: f64,
}

/// Aggregate statistics over a findings snapshot. Derived and stateless;
/// recomputed in full on every fetch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindingStats {
    pub total: usize,
    pub open: usize,
    pub false_positives: usize,
    pub valid_findings: usize,
    /// Count of findings carrying any resolution name.
    pub total_resolved: usize,
    /// Tally per resolution name, descending by count.
    pub resolution_counts: Vec<(String, usize)>,
    pub time_to_close: TimeToCloseSummary,
    /// Tally per threat type, descending by count.
    pub threat_types: Vec<(String, usize)>,
    /// Tally per priority, ascending by priority value regardless of count.
    pub priority_dist: Vec<(Priority, usize)>,
    /// Tally per organization, descending by count.
    pub org_findings: Vec<(String, usize)>,
}

/// Compute aggregate statistics for a findings snapshot. Pure: no IO, no
/// error paths; an empty collection yields all-zero output.
pub fn compute_stats(findings: &[Finding]) -> FindingStats {
    let resolution_counts =
        value_counts(findings.iter().filter_map(|f| f.resolution_name.as_deref()));
    let total_resolved = resolution_counts.iter().map(|(_, n)| n).sum();
    let false_positives = count_for(&resolution_counts, RESOLUTION_FALSE_POSITIVE);
    let valid_findings = count_for(&resolution_counts, RESOLUTION_VALID);

    let close_times: Vec<f64> = findings
        .iter()
        .filter_map(|f| f.time_to_close_hours())
        .collect();

    let mut priority_counts: HashMap<Priority, usize> = HashMap::new();
    for f in findings {
        *priority_counts.entry(f.priority).or_default() += 1;
    }
    let mut priority_dist: Vec<(Priority, usize)> = priority_counts.into_iter().collect();
    priority_dist.sort_by_key(|(p, _)| *p);

    FindingStats {
        total: findings.len(),
        open: findings.iter().filter(|f| f.is_open()).count(),
        false_positives,
        valid_findings,
        total_resolved,
        resolution_counts,
        time_to_close: summarize_close_times(&close_times),
        threat_types: value_counts(findings.iter().map(|f| f.type_name.as_str())),
        priority_dist,
        org_findings: value_counts(findings.iter().map(|f| f.org_name.as_str())),
    }
}

/// Tally distinct values, ordered descending by count with name as tiebreak.
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, n)| (k.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

fn count_for(counts: &[(String, usize)], name: &str) -> usize {
    counts
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

fn summarize_close_times(hours: &[f64]) -> TimeToCloseSummary {
    if hours.is_empty() {
        return TimeToCloseSummary::default();
    }
    let mut sorted = hours.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    let max = *sorted.last().unwrap_or(&0.0);

    TimeToCloseSummary {
        mean_hours: mean,
        median_hours: median,
        max_hours: max,
    }
}
