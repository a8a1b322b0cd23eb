use clap::Parser;
use tracing_subscriber::EnvFilter;

use findash::{cli, errors};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Dashboard(args) => cli::dashboard::handle_dashboard(args).await,
        cli::Commands::Findings(args) => cli::findings::handle_findings(args).await,
        cli::Commands::Accounts(args) => cli::accounts::handle_accounts(args).await,
        cli::Commands::Check(args) => cli::check::handle_check(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                errors::FindashError::Config(_) => 2,
                errors::FindashError::Authentication(_) => 3,
                errors::FindashError::Permission(_) => 4,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
