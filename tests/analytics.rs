use chrono::{Duration, TimeZone, Utc};

use findash::analytics::{
    compute_stats, critical_findings, daily_counts, hourly_trend, priority_by_status,
    recent_findings, ROLLING_WINDOW,
};
use findash::models::{Finding, Priority};

struct FindingBuilder {
    finding: Finding,
}

impl FindingBuilder {
    fn new(id: &str) -> Self {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Self {
            finding: Finding {
                finding_id: id.to_string(),
                org_id: "org-1".to_string(),
                org_name: "Acme".to_string(),
                name: format!("Finding {}", id),
                priority: Priority(3),
                status_name: "Open".to_string(),
                type_name: "Threat".to_string(),
                resolution_name: None,
                created: Some(ts),
                modified: Some(ts),
            },
        }
    }

    fn priority(mut self, p: u8) -> Self {
        self.finding.priority = Priority(p);
        self
    }

    fn status(mut self, s: &str) -> Self {
        self.finding.status_name = s.to_string();
        self
    }

    fn resolution(mut self, r: &str) -> Self {
        self.finding.resolution_name = Some(r.to_string());
        self
    }

    fn closed_after_hours(mut self, hours: i64) -> Self {
        self.finding.status_name = "Resolved".to_string();
        self.finding.modified = self.finding.created.map(|c| c + Duration::hours(hours));
        self
    }

    fn created_day(mut self, day: u32) -> Self {
        let ts = Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap();
        self.finding.created = Some(ts);
        self.finding.modified = Some(ts);
        self
    }

    fn build(self) -> Finding {
        self.finding
    }
}

#[test]
fn time_to_close_is_zero_when_nothing_closed() {
    let findings = vec![
        FindingBuilder::new("a").priority(1).build(),
        FindingBuilder::new("b").priority(2).build(),
    ];
    let stats = compute_stats(&findings);
    assert_eq!(stats.time_to_close.mean_hours, 0.0);
    assert_eq!(stats.time_to_close.median_hours, 0.0);
    assert_eq!(stats.time_to_close.max_hours, 0.0);
    assert!(stats.time_to_close.mean_hours.is_finite());
}

#[test]
fn resolution_counts_sum_to_total_resolved() {
    let findings = vec![
        FindingBuilder::new("a")
            .closed_after_hours(2)
            .resolution("Valid")
            .build(),
        FindingBuilder::new("b")
            .closed_after_hours(3)
            .resolution("False Positive")
            .build(),
        FindingBuilder::new("c")
            .closed_after_hours(4)
            .resolution("False Positive")
            .build(),
        FindingBuilder::new("d").build(),
    ];
    let stats = compute_stats(&findings);
    let sum: usize = stats.resolution_counts.iter().map(|(_, n)| n).sum();
    assert_eq!(sum, stats.total_resolved);
    assert_eq!(stats.total_resolved, 3);
    assert_eq!(stats.false_positives, 2);
    assert_eq!(stats.valid_findings, 1);
}

#[test]
fn priority_distribution_keys_are_distinct_and_ascending() {
    let findings = vec![
        FindingBuilder::new("a").priority(5).build(),
        FindingBuilder::new("b").priority(5).build(),
        FindingBuilder::new("c").priority(2).build(),
        FindingBuilder::new("d").priority(4).build(),
        FindingBuilder::new("e").priority(2).build(),
    ];
    let stats = compute_stats(&findings);
    let keys: Vec<u8> = stats.priority_dist.iter().map(|(p, _)| p.0).collect();
    assert_eq!(keys, vec![2, 4, 5]);
}

#[test]
fn empty_collection_aggregates_without_error() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.open, 0);
    assert_eq!(stats.total_resolved, 0);
    assert!(stats.resolution_counts.is_empty());
    assert!(stats.threat_types.is_empty());
    assert!(stats.priority_dist.is_empty());
    assert!(stats.org_findings.is_empty());
    assert_eq!(stats.time_to_close.max_hours, 0.0);

    assert!(daily_counts(&[]).is_empty());
    assert!(hourly_trend(&[], ROLLING_WINDOW).is_empty());
    assert!(priority_by_status(&[]).is_empty());
}

#[test]
fn aggregation_is_idempotent() {
    let findings = vec![
        FindingBuilder::new("a")
            .priority(1)
            .closed_after_hours(6)
            .resolution("Valid")
            .build(),
        FindingBuilder::new("b").priority(3).created_day(2).build(),
        FindingBuilder::new("c").priority(3).created_day(3).build(),
    ];

    let first = compute_stats(&findings);
    let second = compute_stats(&findings);
    assert_eq!(first.total, second.total);
    assert_eq!(first.time_to_close, second.time_to_close);
    assert_eq!(first.resolution_counts, second.resolution_counts);
    assert_eq!(first.threat_types, second.threat_types);
    assert_eq!(first.priority_dist, second.priority_dist);
    assert_eq!(first.org_findings, second.org_findings);

    assert_eq!(daily_counts(&findings), daily_counts(&findings));
    assert_eq!(
        hourly_trend(&findings, ROLLING_WINDOW),
        hourly_trend(&findings, ROLLING_WINDOW)
    );
}

#[test]
fn recent_and_critical_subsets() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
    let findings = vec![
        FindingBuilder::new("old").priority(1).created_day(1).build(),
        FindingBuilder::new("new-critical")
            .priority(1)
            .created_day(9)
            .build(),
        FindingBuilder::new("new-low").priority(4).created_day(8).build(),
    ];

    let recent = recent_findings(&findings, now, 7);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].finding_id, "new-critical");

    let critical = critical_findings(&findings);
    assert_eq!(critical.len(), 2);
    assert_eq!(critical[0].finding_id, "new-critical");
    assert_eq!(critical[1].finding_id, "old");
}
