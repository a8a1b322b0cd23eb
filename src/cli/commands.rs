use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "findash", version, about = "MSP security findings reporting dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch findings and render the full dashboard
    Dashboard(DashboardArgs),
    /// List findings, optionally filtered
    Findings(FindingsArgs),
    /// List managed accounts
    Accounts(AccountsArgs),
    /// Validate configuration and credentials
    Check(CheckArgs),
}

#[derive(Args, Clone)]
pub struct DashboardArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Restrict to these organizations (repeatable)
    #[arg(long)]
    pub org: Vec<String>,

    /// Show all recent findings instead of the first page
    #[arg(long)]
    pub all: bool,

    /// Write a markdown report to this path
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct FindingsArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Filter by organization name (repeatable)
    #[arg(long)]
    pub org: Vec<String>,

    /// Filter by priority 1-5 (repeatable)
    #[arg(short, long)]
    pub priority: Vec<u8>,

    /// Filter by status name (repeatable)
    #[arg(long)]
    pub status: Vec<String>,

    /// Filter by threat type name (repeatable)
    #[arg(long = "type")]
    pub type_name: Vec<String>,

    /// Maximum number of rows to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct AccountsArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}
