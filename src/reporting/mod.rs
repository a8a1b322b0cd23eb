pub mod charts;
pub mod markdown;
pub mod tables;

use console::{style, StyledObject};

use crate::models::Priority;

/// Priority label colored by severity for terminal output.
pub fn styled_priority(priority: Priority) -> StyledObject<String> {
    let label = priority.label();
    match priority.0 {
        1 => style(label).red().bold(),
        2 => style(label).red(),
        3 => style(label).yellow(),
        4 => style(label).green(),
        _ => style(label).dim(),
    }
}
