use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::analytics::{CrossTab, FindingStats};
use crate::errors::FindashError;
use crate::models::Finding;
use crate::utils::{format_hours, format_timestamp};

/// Everything the markdown report needs, precomputed by the caller.
pub struct ReportInputs<'a> {
    pub stats: &'a FindingStats,
    pub recent: &'a [Finding],
    pub critical: &'a [Finding],
    pub priority_status: &'a CrossTab,
    pub org_priority: &'a CrossTab,
    pub app_base_url: &'a str,
    pub recent_days: i64,
    pub generated_at: DateTime<Utc>,
}

pub fn render_report(inputs: &ReportInputs) -> String {
    let stats = inputs.stats;
    let mut report = String::new();

    report.push_str("# MSP Findings Report\n\n");
    report.push_str(&format!(
        "Generated {}\n\n",
        inputs.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    report.push_str("## Key Metrics\n\n");
    report.push_str("| Metric | Value |\n|---|---|\n");
    report.push_str(&format!("| Total findings | {} |\n", stats.total));
    report.push_str(&format!(
        "| Recent findings ({}d) | {} |\n",
        inputs.recent_days,
        inputs.recent.len()
    ));
    report.push_str(&format!("| Critical findings | {} |\n", inputs.critical.len()));
    report.push_str(&format!("| Open findings | {} |\n\n", stats.open));

    report.push_str("## Critical Findings\n\n");
    if inputs.critical.is_empty() {
        report.push_str("No critical findings.\n\n");
    } else {
        for f in inputs.critical {
            report.push_str(&format!(
                "- [{}]({}) — {} | {} | {} | {}\n",
                f.name,
                f.url(inputs.app_base_url),
                f.org_name,
                format_timestamp(f.created),
                f.status_name,
                f.type_name,
            ));
        }
        report.push('\n');
    }

    report.push_str(&format!(
        "## Recent Findings (Last {} Days)\n\n",
        inputs.recent_days
    ));
    if inputs.recent.is_empty() {
        report.push_str("No recent findings.\n\n");
    } else {
        report.push_str("| Finding | Organization | Date | Status | Type | Priority |\n");
        report.push_str("|---|---|---|---|---|---|\n");
        for f in inputs.recent {
            report.push_str(&format!(
                "| [{}]({}) | {} | {} | {} | {} | {} |\n",
                f.name,
                f.url(inputs.app_base_url),
                f.org_name,
                format_timestamp(f.created),
                f.status_name,
                f.type_name,
                f.priority.label(),
            ));
        }
        report.push('\n');
    }

    report.push_str("## Resolution\n\n");
    report.push_str("| Metric | Count |\n|---|---|\n");
    report.push_str(&format!("| False positives | {} |\n", stats.false_positives));
    report.push_str(&format!("| Valid findings | {} |\n", stats.valid_findings));
    report.push_str(&format!("| Total resolved | {} |\n\n", stats.total_resolved));

    report.push_str("## Time to Close\n\n");
    report.push_str("| Metric | Value |\n|---|---|\n");
    report.push_str(&format!(
        "| Average | {} |\n",
        format_hours(stats.time_to_close.mean_hours)
    ));
    report.push_str(&format!(
        "| Median | {} |\n",
        format_hours(stats.time_to_close.median_hours)
    ));
    report.push_str(&format!(
        "| Max | {} |\n\n",
        format_hours(stats.time_to_close.max_hours)
    ));

    report.push_str("## Findings by Priority and Status\n\n");
    report.push_str(&crosstab_markdown(inputs.priority_status, "Priority"));

    report.push_str("## Findings by Organization and Priority\n\n");
    report.push_str(&crosstab_markdown(inputs.org_priority, "Organization"));

    report.push_str("## Threat Types\n\n");
    report.push_str(&counts_markdown("Type", &stats.threat_types));

    report.push_str("## Findings by Organization\n\n");
    report.push_str(&counts_markdown("Organization", &stats.org_findings));

    report.push_str("## Priority Distribution\n\n");
    report.push_str("| Priority | Count |\n|---|---|\n");
    for (priority, count) in &stats.priority_dist {
        report.push_str(&format!("| {} | {} |\n", priority.tag(), count));
    }
    report.push('\n');

    report
}

fn crosstab_markdown(tab: &CrossTab, row_header: &str) -> String {
    if tab.is_empty() {
        return "No data.\n\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("| {} |", row_header));
    for col in &tab.col_labels {
        out.push_str(&format!(" {} |", col));
    }
    if tab.margins {
        out.push_str(" All |");
    }
    out.push('\n');

    let cols = tab.col_labels.len() + 1 + usize::from(tab.margins);
    out.push_str(&format!("|{}\n", "---|".repeat(cols)));

    for (i, row_label) in tab.row_labels.iter().enumerate() {
        out.push_str(&format!("| {} |", row_label));
        for value in &tab.cells[i] {
            out.push_str(&format!(" {} |", value));
        }
        if tab.margins {
            out.push_str(&format!(" {} |", tab.row_totals[i]));
        }
        out.push('\n');
    }
    if tab.margins {
        out.push_str("| All |");
        for total in &tab.col_totals {
            out.push_str(&format!(" {} |", total));
        }
        out.push_str(&format!(" {} |\n", tab.grand_total));
    }
    out.push('\n');
    out
}

fn counts_markdown(header: &str, counts: &[(String, usize)]) -> String {
    if counts.is_empty() {
        return "No data.\n\n".to_string();
    }
    let mut out = format!("| {} | Count |\n|---|---|\n", header);
    for (name, count) in counts {
        out.push_str(&format!("| {} | {} |\n", name, count));
    }
    out.push('\n');
    out
}

pub async fn write_report(path: &Path, content: &str) -> Result<(), FindashError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{
        compute_stats, critical_findings, org_by_priority, priority_by_status, recent_findings,
    };
    use crate::models::Priority;
    use chrono::TimeZone;

    fn finding(priority: u8, status: &str, day: u32) -> Finding {
        let ts = Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap();
        Finding {
            finding_id: format!("f-{}-{}", priority, day),
            org_id: "org-1".to_string(),
            org_name: "Acme".to_string(),
            name: "Suspicious login".to_string(),
            priority: Priority(priority),
            status_name: status.to_string(),
            type_name: "Threat".to_string(),
            resolution_name: None,
            created: Some(ts),
            modified: Some(ts),
        }
    }

    #[test]
    fn test_render_report_sections() {
        let findings = vec![finding(1, "Open", 1), finding(3, "Resolved", 2)];
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let stats = compute_stats(&findings);
        let recent = recent_findings(&findings, now, 7);
        let critical = critical_findings(&findings);
        let priority_status = priority_by_status(&findings);
        let org_priority = org_by_priority(&findings);

        let report = render_report(&ReportInputs {
            stats: &stats,
            recent: &recent,
            critical: &critical,
            priority_status: &priority_status,
            org_priority: &org_priority,
            app_base_url: "https://app.example.com",
            recent_days: 7,
            generated_at: now,
        });

        assert!(report.contains("# MSP Findings Report"));
        assert!(report.contains("| Total findings | 2 |"));
        assert!(report.contains("https://app.example.com/org-1/reporting/findings/f-1-1"));
        assert!(report.contains("## Findings by Priority and Status"));
        assert!(report.contains("| P1 Critical |"));
    }

    #[test]
    fn test_render_report_empty_snapshot() {
        let findings: Vec<Finding> = Vec::new();
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let stats = compute_stats(&findings);
        let priority_status = priority_by_status(&findings);
        let org_priority = org_by_priority(&findings);

        let report = render_report(&ReportInputs {
            stats: &stats,
            recent: &[],
            critical: &[],
            priority_status: &priority_status,
            org_priority: &org_priority,
            app_base_url: "https://app.example.com",
            recent_days: 7,
            generated_at: now,
        });

        assert!(report.contains("No critical findings."));
        assert!(report.contains("No recent findings."));
        assert!(report.contains("| Total findings | 0 |"));
    }
}
