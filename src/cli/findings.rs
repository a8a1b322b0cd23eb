use console::style;

use super::commands::FindingsArgs;
use crate::analytics::FindingFilter;
use crate::errors::FindashError;
use crate::reporting::tables;

pub async fn handle_findings(args: FindingsArgs) -> Result<(), FindashError> {
    let (_settings, client) = super::connect(args.config.as_deref()).await?;

    let findings = match client.fetch_findings().await {
        Ok(findings) => findings,
        Err(FindashError::Permission(msg)) => {
            println!("{} {}", style("⚠").yellow(), msg);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let filter = FindingFilter {
        orgs: args.org,
        priorities: args.priority,
        statuses: args.status,
        types: args.type_name,
    };
    let mut matched = filter.apply(&findings);
    matched.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.created.cmp(&a.created))
    });
    let total = matched.len();
    if let Some(limit) = args.limit {
        matched.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else if matched.is_empty() {
        println!("No findings matched the filter.");
    } else {
        println!("{}", tables::findings_table(&matched));
        println!("Showing {} of {} findings", matched.len(), total);
    }

    Ok(())
}
