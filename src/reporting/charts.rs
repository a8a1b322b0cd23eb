use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::styled_priority;
use crate::analytics::{DailyBucket, TrendPoint};
use crate::models::Priority;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 28;

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max).min(BAR_WIDTH);
    "█".repeat(len)
}

fn clip(label: &str) -> String {
    if label.chars().count() > LABEL_WIDTH {
        let clipped: String = label.chars().take(LABEL_WIDTH - 1).collect();
        format!("{}…", clipped)
    } else {
        label.to_string()
    }
}

/// Horizontal bar chart over labeled counts, one row per label.
pub fn bar_chart(rows: &[(String, usize)]) -> String {
    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let mut out = String::new();
    for (label, count) in rows {
        out.push_str(&format!(
            "  {:<width$} {:>5}  {}\n",
            clip(label),
            count,
            bar(*count, max),
            width = LABEL_WIDTH,
        ));
    }
    out
}

/// Bar chart over the priority distribution, labels colored by severity.
pub fn priority_chart(rows: &[(Priority, usize)]) -> String {
    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let mut out = String::new();
    for (priority, count) in rows {
        // The styled label embeds ANSI codes, so pad the plain text by hand.
        let plain = priority.label();
        let pad = LABEL_WIDTH.saturating_sub(plain.chars().count());
        out.push_str(&format!(
            "  {}{} {:>5}  {}\n",
            styled_priority(*priority),
            " ".repeat(pad),
            count,
            bar(*count, max),
        ));
    }
    out
}

/// Per-day timeline: total bar plus a per-priority breakdown column.
pub fn daily_timeline(buckets: &[DailyBucket]) -> String {
    let mut days: BTreeMap<NaiveDate, Vec<(Priority, usize)>> = BTreeMap::new();
    for b in buckets {
        days.entry(b.date).or_default().push((b.priority, b.count));
    }
    let max = days
        .values()
        .map(|v| v.iter().map(|(_, n)| n).sum::<usize>())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (date, parts) in &days {
        let total: usize = parts.iter().map(|(_, n)| n).sum();
        let breakdown = parts
            .iter()
            .map(|(p, n)| format!("P{}:{}", p.0, n))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "  {}  {:>5}  {:<width$}  {}\n",
            date.format("%Y-%m-%d"),
            total,
            bar(total, max),
            breakdown,
            width = BAR_WIDTH,
        ));
    }
    out
}

/// One line per priority: occupied hourly buckets, the latest rolling
/// average, and the busiest hour.
pub fn trend_summary(trend: &BTreeMap<Priority, Vec<TrendPoint>>) -> String {
    let mut out = String::new();
    for (priority, points) in trend {
        let latest = points.last().map(|p| p.rolling_avg).unwrap_or(0.0);
        let peak = points.iter().max_by_key(|p| p.count);
        let peak_desc = peak
            .map(|p| format!("{} at {}", p.count, p.hour.format("%Y-%m-%d %H:00")))
            .unwrap_or_else(|| "-".to_string());
        let plain = priority.label();
        let pad = 12usize.saturating_sub(plain.chars().count());
        out.push_str(&format!(
            "  {}{}  {:>3} active hours | rolling avg {:.2}/h | peak {}\n",
            styled_priority(*priority),
            " ".repeat(pad),
            points.len(),
            latest,
            peak_desc,
        ));
    }
    out
}
