use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::models::{Finding, Priority};

/// Rolling-average window for the hourly trend, in occupied buckets.
pub const ROLLING_WINDOW: usize = 24;

/// Finding count for one (day, priority) cell of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub priority: Priority,
    pub count: usize,
}

/// One hourly bucket of a priority's trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub hour: DateTime<Utc>,
    pub count: usize,
    pub rolling_avg: f64,
}

/// Per-day finding counts broken out by priority, ordered by (date, priority).
/// Findings without a created timestamp are skipped.
pub fn daily_counts(findings: &[Finding]) -> Vec<DailyBucket> {
    let mut counts: BTreeMap<(NaiveDate, Priority), usize> = BTreeMap::new();
    for f in findings {
        if let Some(created) = f.created {
            *counts.entry((created.date_naive(), f.priority)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((date, priority), count)| DailyBucket {
            date,
            priority,
            count,
        })
        .collect()
}

/// Per-priority hourly buckets with a rolling average over the last `window`
/// occupied buckets (minimum one). Buckets are the hours that actually saw
/// findings; the average runs over those rows in order, not over wall-clock
/// hours.
pub fn hourly_trend(findings: &[Finding], window: usize) -> BTreeMap<Priority, Vec<TrendPoint>> {
    let window = window.max(1);
    let mut counts: BTreeMap<(Priority, DateTime<Utc>), usize> = BTreeMap::new();
    for f in findings {
        if let Some(created) = f.created {
            if let Some(hour) = floor_to_hour(created) {
                *counts.entry((f.priority, hour)).or_default() += 1;
            }
        }
    }

    let mut trend: BTreeMap<Priority, Vec<TrendPoint>> = BTreeMap::new();
    for ((priority, hour), count) in counts {
        trend.entry(priority).or_default().push(TrendPoint {
            hour,
            count,
            rolling_avg: 0.0,
        });
    }

    for points in trend.values_mut() {
        for i in 0..points.len() {
            let start = i + 1 - window.min(i + 1);
            let len = i - start + 1;
            let sum: usize = points[start..=i].iter().map(|p| p.count).sum();
            points[i].rolling_avg = sum as f64 / len as f64;
        }
    }

    trend
}

fn floor_to_hour(ts: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let secs = ts.timestamp().div_euclid(3600) * 3600;
    Utc.timestamp_opt(secs, 0).single()
}
