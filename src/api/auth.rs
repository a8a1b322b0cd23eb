use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::models::TokenResponse;
use crate::errors::FindashError;

/// Exchanges OAuth client credentials for a bearer token. One POST per
/// session; tokens are not cached or refreshed.
pub struct TokenProvider {
    client: Client,
    auth_url: String,
    audience: String,
}

impl TokenProvider {
    pub fn new(auth_url: &str, audience: &str) -> Self {
        Self {
            client: Client::new(),
            auth_url: auth_url.to_string(),
            audience: audience.to_string(),
        }
    }

    pub async fn fetch_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String, FindashError> {
        let body = json!({
            "grant_type": "client_credentials",
            "client_id": client_id,
            "client_secret": client_secret,
            "audience": self.audience,
        });

        let resp = self
            .client
            .post(&self.auth_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FindashError::Network(format!("Token request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(FindashError::Authentication(
                "Token endpoint rejected the client credentials".into(),
            ));
        }
        if !status.is_success() {
            return Err(FindashError::Api(format!(
                "Token endpoint returned {}",
                status
            )));
        }

        let data: TokenResponse = resp
            .json()
            .await
            .map_err(|e| FindashError::Api(format!("Failed to parse token response: {}", e)))?;

        debug!("Access token acquired");
        Ok(data.access_token)
    }
}
