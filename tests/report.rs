use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

use findash::analytics::{
    compute_stats, critical_findings, org_by_priority, priority_by_status, recent_findings,
};
use findash::models::{Finding, Priority};
use findash::reporting::markdown::{render_report, write_report, ReportInputs};

fn make_test_findings() -> Vec<Finding> {
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    vec![
        Finding {
            finding_id: "f-1".to_string(),
            org_id: "org-1".to_string(),
            org_name: "Acme".to_string(),
            name: "Password spray against O365".to_string(),
            priority: Priority(1),
            status_name: "Open".to_string(),
            type_name: "Threat".to_string(),
            resolution_name: None,
            created: Some(base),
            modified: Some(base),
        },
        Finding {
            finding_id: "f-2".to_string(),
            org_id: "org-2".to_string(),
            org_name: "Umbrella".to_string(),
            name: "Anomalous admin login".to_string(),
            priority: Priority(3),
            status_name: "Resolved".to_string(),
            type_name: "Suspect".to_string(),
            resolution_name: Some("False Positive".to_string()),
            created: Some(base),
            modified: Some(base + Duration::hours(5)),
        },
    ]
}

fn render(findings: &[Finding]) -> String {
    let now = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
    let stats = compute_stats(findings);
    let recent = recent_findings(findings, now, 7);
    let critical = critical_findings(findings);
    let priority_status = priority_by_status(findings);
    let org_priority = org_by_priority(findings);
    render_report(&ReportInputs {
        stats: &stats,
        recent: &recent,
        critical: &critical,
        priority_status: &priority_status,
        org_priority: &org_priority,
        app_base_url: "https://app.example.com",
        recent_days: 7,
        generated_at: now,
    })
}

#[test]
fn report_contains_all_sections() {
    let report = render(&make_test_findings());

    for section in [
        "## Key Metrics",
        "## Critical Findings",
        "## Recent Findings (Last 7 Days)",
        "## Resolution",
        "## Time to Close",
        "## Findings by Priority and Status",
        "## Findings by Organization and Priority",
        "## Threat Types",
        "## Findings by Organization",
        "## Priority Distribution",
    ] {
        assert!(report.contains(section), "missing section {}", section);
    }
}

#[test]
fn report_links_findings_to_the_console() {
    let report = render(&make_test_findings());
    assert!(report.contains("https://app.example.com/org-1/reporting/findings/f-1"));
}

#[test]
fn report_reflects_aggregates() {
    let report = render(&make_test_findings());
    assert!(report.contains("| Total findings | 2 |"));
    assert!(report.contains("| Open findings | 1 |"));
    assert!(report.contains("| False positives | 1 |"));
    assert!(report.contains("| Total resolved | 1 |"));
    // One closed finding, 5 hours to close
    assert!(report.contains("| Average | 5.0h |"));
    assert!(report.contains("| P1 Critical | 1 |"));
}

#[tokio::test]
async fn report_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports").join("findings.md");

    let report = render(&make_test_findings());
    write_report(&path, &report).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, report);
    assert!(written.starts_with("# MSP Findings Report"));
}
