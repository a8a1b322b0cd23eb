use std::path::Path;

use chrono::Utc;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::commands::DashboardArgs;
use crate::analytics::{self, FindingFilter};
use crate::errors::FindashError;
use crate::reporting::{charts, markdown, tables};
use crate::utils::format_hours;

pub async fn handle_dashboard(args: DashboardArgs) -> Result<(), FindashError> {
    let bar = fetch_spinner("Authenticating...");
    let (settings, client) = finish_on_err(&bar, super::connect(args.config.as_deref()).await)?;

    bar.set_message("Fetching accounts...");
    let accounts = finish_on_err(&bar, client.fetch_accounts().await)?;
    if accounts.is_empty() {
        bar.finish_and_clear();
        return Err(FindashError::Api(
            "No managed accounts returned for these credentials".into(),
        ));
    }
    info!(accounts = accounts.len(), "Fetched accounts");

    bar.set_message("Fetching findings...");
    let fetched = client.fetch_findings().await;
    bar.finish_and_clear();

    let mut findings = match fetched {
        Ok(findings) => findings,
        Err(FindashError::Permission(msg)) => {
            // 403 here is survivable: the credentials can list accounts but
            // not findings.
            warn!("{}", msg);
            println!("{} {}", style("⚠").yellow(), msg);
            Vec::new()
        }
        Err(e) => {
            println!("{} {}", style("✗").red(), e);
            Vec::new()
        }
    };

    if findings.is_empty() {
        println!(
            "No findings found. This could be due to API permissions or no findings in the system."
        );
        return Ok(());
    }

    if !args.org.is_empty() {
        let filter = FindingFilter {
            orgs: args.org.clone(),
            ..Default::default()
        };
        findings = filter.apply(&findings);
        info!(remaining = findings.len(), "Applied organization filter");
    }

    let now = Utc::now();
    let critical = analytics::critical_findings(&findings);
    let recent = analytics::recent_findings(&findings, now, settings.recent_days);
    let stats = analytics::compute_stats(&findings);

    section("Critical Findings");
    if critical.is_empty() {
        println!("{}", style("No critical findings found!").green());
    } else {
        println!("{}", tables::findings_table(&critical));
    }

    section(&format!(
        "Recent Findings (Last {} Days)",
        settings.recent_days
    ));
    if recent.is_empty() {
        println!("No recent findings found!");
    } else {
        let shown = if args.all {
            recent.len()
        } else {
            recent.len().min(settings.recent_limit)
        };
        println!("{}", tables::findings_table(&recent[..shown]));
        println!("Showing {} of {} recent findings", shown, recent.len());
    }

    section("Key Metrics");
    println!(
        "{}",
        tables::metrics_table(&[
            ("Total Findings", stats.total.to_string()),
            (
                "Recent Findings",
                format!("{} ({}d)", recent.len(), settings.recent_days)
            ),
            ("Critical Findings", critical.len().to_string()),
            ("Open Findings", stats.open.to_string()),
        ])
    );

    section("Findings Timeline");
    let daily = analytics::daily_counts(&findings);
    print!("{}", charts::daily_timeline(&daily));

    section("Findings by Priority and Status");
    let priority_status = analytics::priority_by_status(&findings);
    println!("{}", tables::crosstab_table(&priority_status, "Priority"));

    section("Priority Trend (24-hour rolling average)");
    let trend = analytics::hourly_trend(&findings, analytics::ROLLING_WINDOW);
    print!("{}", charts::trend_summary(&trend));

    section("Findings by Organization and Priority");
    let org_priority = analytics::org_by_priority(&findings);
    println!("{}", tables::crosstab_table(&org_priority, "Organization"));

    section("Resolution");
    println!(
        "{}",
        tables::metrics_table(&[
            ("False Positives", stats.false_positives.to_string()),
            ("Valid Findings", stats.valid_findings.to_string()),
            ("Total Resolved", stats.total_resolved.to_string()),
        ])
    );

    section("Time to Close");
    println!(
        "{}",
        tables::metrics_table(&[
            ("Average", format_hours(stats.time_to_close.mean_hours)),
            ("Median", format_hours(stats.time_to_close.median_hours)),
            ("Max", format_hours(stats.time_to_close.max_hours)),
        ])
    );

    section("Threat Type Distribution");
    print!("{}", charts::bar_chart(&stats.threat_types));

    section("Findings by Organization");
    print!("{}", charts::bar_chart(&stats.org_findings));

    section("Priority Distribution");
    print!("{}", charts::priority_chart(&stats.priority_dist));

    if let Some(output) = &args.output {
        let report = markdown::render_report(&markdown::ReportInputs {
            stats: &stats,
            recent: &recent,
            critical: &critical,
            priority_status: &priority_status,
            org_priority: &org_priority,
            app_base_url: &settings.app_base_url,
            recent_days: settings.recent_days,
            generated_at: now,
        });
        markdown::write_report(Path::new(output), &report).await?;
        println!("\nReport written to {}", output);
    }

    Ok(())
}

fn section(title: &str) {
    println!("\n{}", style(title).cyan().bold());
}

fn fetch_spinner(msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(120));
    bar
}

fn finish_on_err<T>(bar: &ProgressBar, result: Result<T, FindashError>) -> Result<T, FindashError> {
    if result.is_err() {
        bar.finish_and_clear();
    }
    result
}
