use std::path::Path;

use tracing::warn;

use super::credentials::resolve_credential;
use super::types::*;
use crate::errors::FindashError;

pub async fn parse_config(path: &Path) -> Result<FileConfig, FindashError> {
    if !path.exists() {
        return Err(FindashError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(FindashError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: FileConfig = serde_yaml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Resolve runtime settings: optional config file, environment overlay,
/// defaults. The two client credentials are the only required inputs.
pub async fn load_settings(config_path: Option<&Path>) -> Result<Settings, FindashError> {
    let file_config = match config_path {
        Some(path) => parse_config(path).await?,
        None => FileConfig::default(),
    };
    resolve_settings(&file_config)
}

fn resolve_settings(config: &FileConfig) -> Result<Settings, FindashError> {
    let file_creds = config.credentials.clone().unwrap_or_default();

    let client_id = std::env::var(ENV_CLIENT_ID)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| file_creds.client_id.as_deref().map(resolve_credential));
    let client_secret = std::env::var(ENV_CLIENT_SECRET)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| file_creds.client_secret.as_deref().map(resolve_credential));

    let (client_id, client_secret) = match (client_id, client_secret) {
        (Some(id), Some(secret)) => (id, secret),
        _ => {
            return Err(FindashError::Config(format!(
                "Missing API credentials: set {} and {} environment variables",
                ENV_CLIENT_ID, ENV_CLIENT_SECRET
            )))
        }
    };

    let api = config.api.clone().unwrap_or_default();
    let report = config.report.clone().unwrap_or_default();

    Ok(Settings {
        client_id,
        client_secret,
        auth_url: api.auth_url.unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
        api_base_url: api
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        app_base_url: api
            .app_base_url
            .unwrap_or_else(|| DEFAULT_APP_BASE_URL.to_string()),
        audience: api.audience.unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
        recent_days: report.recent_days.unwrap_or(DEFAULT_RECENT_DAYS),
        recent_limit: report.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT),
    })
}

fn validate(config: &FileConfig) -> Result<(), FindashError> {
    if let Some(report) = &config.report {
        if let Some(days) = report.recent_days {
            if days <= 0 {
                return Err(FindashError::Config(format!(
                    "report.recent_days must be positive, got {}",
                    days
                )));
            }
        }
    }

    // A literal secret in the file works but belongs in the environment.
    if let Some(creds) = &config.credentials {
        if let Some(secret) = &creds.client_secret {
            if !secret.is_empty() && !secret.starts_with('$') {
                warn!("client_secret is stored verbatim in the config file; prefer a $VAR reference");
            }
        }
    }

    Ok(())
}
