use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_URL: &str = "https://auth.blumira.com/oauth/token";
pub const DEFAULT_API_BASE_URL: &str = "https://api.blumira.com/public-api/v1";
pub const DEFAULT_APP_BASE_URL: &str = "https://app.blumira.com";
pub const DEFAULT_AUDIENCE: &str = "public-api";

pub const ENV_CLIENT_ID: &str = "BLUMIRA_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "BLUMIRA_CLIENT_SECRET";

pub const DEFAULT_RECENT_DAYS: i64 = 7;
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Optional YAML configuration file. Everything here has a default; the file
/// exists to point the tool at a different deployment or tune the report.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FileConfig {
    pub api: Option<ApiConfig>,
    pub credentials: Option<CredentialsConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ApiConfig {
    pub auth_url: Option<String>,
    pub api_base_url: Option<String>,
    pub app_base_url: Option<String>,
    pub audience: Option<String>,
}

/// API client credentials. Values starting with '$' are resolved from the
/// environment; the environment variables win over the file either way.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CredentialsConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportConfig {
    /// Window for the "recent findings" section, in days.
    pub recent_days: Option<i64>,
    /// Row cap for the recent findings listing.
    pub recent_limit: Option<usize>,
}

/// Fully resolved runtime settings: file config overlaid with environment
/// variables and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub api_base_url: String,
    pub app_base_url: String,
    pub audience: String,
    pub recent_days: i64,
    pub recent_limit: usize,
}
