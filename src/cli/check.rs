use std::path::Path;

use console::style;

use super::commands::CheckArgs;
use crate::api::TokenProvider;
use crate::config::{credentials::mask_secret, load_settings};
use crate::errors::FindashError;

/// Validate the resolved configuration and perform a real token exchange so
/// bad credentials surface here instead of halfway into a dashboard run.
pub async fn handle_check(args: CheckArgs) -> Result<(), FindashError> {
    let settings = load_settings(args.config.as_deref().map(Path::new)).await?;

    println!("Auth URL:     {}", settings.auth_url);
    println!("API base URL: {}", settings.api_base_url);
    println!("App base URL: {}", settings.app_base_url);
    println!("Audience:     {}", settings.audience);
    println!("Client ID:    {}", mask_secret(&settings.client_id));

    let provider = TokenProvider::new(&settings.auth_url, &settings.audience);
    provider
        .fetch_token(&settings.client_id, &settings.client_secret)
        .await?;

    println!(
        "{}",
        style("Credentials OK: token endpoint accepted the client credentials").green()
    );
    Ok(())
}
