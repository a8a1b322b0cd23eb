use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Finding;

/// A two-way contingency table over label pairs, optionally with margin
/// totals ("All" row/column).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrossTab {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// cells[row][col]
    pub cells: Vec<Vec<usize>>,
    pub row_totals: Vec<usize>,
    pub col_totals: Vec<usize>,
    pub grand_total: usize,
    pub margins: bool,
}

impl CrossTab {
    pub fn is_empty(&self) -> bool {
        self.grand_total == 0
    }
}

/// Priority x status distribution with margin totals. Rows are the distinct
/// priorities present, ascending by value; columns are status names sorted
/// ascending.
pub fn priority_by_status(findings: &[Finding]) -> CrossTab {
    build(
        findings
            .iter()
            .map(|f| ((f.priority, f.priority.tag()), f.status_name.clone())),
        true,
    )
}

/// Organization x priority distribution, no margins. Rows are organization
/// names sorted ascending; columns the distinct priorities ascending.
pub fn org_by_priority(findings: &[Finding]) -> CrossTab {
    build(
        findings
            .iter()
            .map(|f| ((f.org_name.clone(), f.org_name.clone()), f.priority.tag())),
        false,
    )
}

/// Build a crosstab from (row sort key + label, column label) pairs.
fn build<K: Ord>(pairs: impl Iterator<Item = ((K, String), String)>, margins: bool) -> CrossTab {
    let mut counts: BTreeMap<(K, String), BTreeMap<String, usize>> = BTreeMap::new();
    let mut cols: BTreeMap<String, ()> = BTreeMap::new();
    for ((key, row_label), col_label) in pairs {
        cols.entry(col_label.clone()).or_default();
        *counts
            .entry((key, row_label))
            .or_default()
            .entry(col_label)
            .or_default() += 1;
    }

    let col_labels: Vec<String> = cols.into_keys().collect();
    let mut row_labels = Vec::with_capacity(counts.len());
    let mut cells = Vec::with_capacity(counts.len());
    for ((_, row_label), row_counts) in counts {
        let row: Vec<usize> = col_labels
            .iter()
            .map(|c| row_counts.get(c).copied().unwrap_or(0))
            .collect();
        row_labels.push(row_label);
        cells.push(row);
    }

    let row_totals: Vec<usize> = cells.iter().map(|row| row.iter().sum()).collect();
    let col_totals: Vec<usize> = (0..col_labels.len())
        .map(|c| cells.iter().map(|row| row[c]).sum())
        .collect();
    let grand_total = row_totals.iter().sum();

    CrossTab {
        row_labels,
        col_labels,
        cells,
        row_totals,
        col_totals,
        grand_total,
        margins,
    }
}
