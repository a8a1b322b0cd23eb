use chrono::{DateTime, Utc};

/// Render an hour count the way the dashboard displays durations.
pub fn format_hours(hours: f64) -> String {
    let hours = if hours.is_finite() { hours } else { 0.0 };
    if hours.abs() < 1.0 {
        format!("{:.0}m", hours * 60.0)
    } else if hours.abs() < 72.0 {
        format!("{:.1}h", hours)
    } else {
        format!("{:.1}d", hours / 24.0)
    }
}

/// Timestamp column format; missing timestamps render as a dash.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
