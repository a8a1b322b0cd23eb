pub mod accounts;
pub mod check;
pub mod commands;
pub mod dashboard;
pub mod findings;

pub use commands::{Cli, Commands};

use std::path::Path;

use crate::api::{ApiClient, TokenProvider};
use crate::config::{load_settings, Settings};
use crate::errors::FindashError;

/// Resolve settings, exchange credentials for a bearer token, and build the
/// API client. Shared by every subcommand that talks to the API.
pub(crate) async fn connect(config: Option<&str>) -> Result<(Settings, ApiClient), FindashError> {
    let settings = load_settings(config.map(Path::new)).await?;
    let provider = TokenProvider::new(&settings.auth_url, &settings.audience);
    let token = provider
        .fetch_token(&settings.client_id, &settings.client_secret)
        .await?;
    let client = ApiClient::new(&settings.api_base_url, &token);
    Ok((settings, client))
}
