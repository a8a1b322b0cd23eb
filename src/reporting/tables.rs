use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use super::styled_priority;
use crate::analytics::CrossTab;
use crate::models::{Account, Finding};
use crate::utils::format_timestamp;

fn base_table(header: Vec<&str>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(header);
    t
}

/// Findings listing. Columns: Finding | Organization | Date | Status | Type | Priority.
pub fn findings_table(findings: &[Finding]) -> Table {
    let mut t = base_table(vec![
        "Finding",
        "Organization",
        "Date",
        "Status",
        "Type",
        "Priority",
    ]);
    for f in findings {
        let mut row = Row::new();
        row.add_cell(Cell::new(&f.name));
        row.add_cell(Cell::new(&f.org_name));
        row.add_cell(Cell::new(format_timestamp(f.created)));
        row.add_cell(Cell::new(&f.status_name));
        row.add_cell(Cell::new(&f.type_name));
        row.add_cell(Cell::new(styled_priority(f.priority).to_string()));
        t.add_row(row);
    }
    t
}

pub fn accounts_table(accounts: &[Account]) -> Table {
    let mut t = base_table(vec!["Organization", "Org ID"]);
    for a in accounts {
        t.add_row(vec![a.name.clone(), a.org_id.clone()]);
    }
    t
}

/// Two-column label/value table for metric blocks.
pub fn metrics_table(rows: &[(&str, String)]) -> Table {
    let mut t = base_table(vec!["Metric", "Value"]);
    for (label, value) in rows {
        let mut row = Row::new();
        row.add_cell(Cell::new(*label));
        row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
        t.add_row(row);
    }
    t
}

/// Render a crosstab; margin totals get an "All" row and column when present.
pub fn crosstab_table(tab: &CrossTab, row_header: &str) -> Table {
    let mut header = vec![row_header.to_string()];
    header.extend(tab.col_labels.iter().cloned());
    if tab.margins {
        header.push("All".to_string());
    }
    let mut t = base_table(header.iter().map(|s| s.as_str()).collect());

    for (i, row_label) in tab.row_labels.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(row_label));
        for value in &tab.cells[i] {
            row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
        }
        if tab.margins {
            row.add_cell(Cell::new(tab.row_totals[i]).set_alignment(CellAlignment::Right));
        }
        t.add_row(row);
    }

    if tab.margins && !tab.row_labels.is_empty() {
        let mut row = Row::new();
        row.add_cell(Cell::new("All"));
        for total in &tab.col_totals {
            row.add_cell(Cell::new(total).set_alignment(CellAlignment::Right));
        }
        row.add_cell(Cell::new(tab.grand_total).set_alignment(CellAlignment::Right));
        t.add_row(row);
    }

    t
}
