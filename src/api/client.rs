use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{AccountRecord, DataEnvelope, FindingRecord};
use crate::errors::FindashError;
use crate::models::{Account, Finding};

pub const ACCOUNTS_PATH: &str = "/msp/accounts";
pub const FINDINGS_PATH: &str = "/msp/accounts/findings";

/// Bearer-authorized client for the findings API. Read-only: two GET
/// endpoints, no pagination state, no retries.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub async fn fetch_accounts(&self) -> Result<Vec<Account>, FindashError> {
        let records: Vec<AccountRecord> = self.get_list(ACCOUNTS_PATH, "accounts").await?;
        Ok(records.into_iter().map(AccountRecord::into_account).collect())
    }

    pub async fn fetch_findings(&self) -> Result<Vec<Finding>, FindashError> {
        let records: Vec<FindingRecord> = self.get_list(FINDINGS_PATH, "findings").await?;
        Ok(records.into_iter().map(FindingRecord::into_finding).collect())
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<Vec<T>, FindashError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| FindashError::Network(format!("Error fetching {}: {}", what, e)))?;

        let status = resp.status();
        match status.as_u16() {
            401 => {
                return Err(FindashError::Authentication(format!(
                    "Unauthorized fetching {}: the token was rejected",
                    what
                )))
            }
            403 => {
                return Err(FindashError::Permission(format!(
                    "Permission denied to fetch {}. Please check your API permissions.",
                    what
                )))
            }
            _ if !status.is_success() => {
                return Err(FindashError::Api(format!(
                    "Error fetching {}: server returned {}",
                    what, status
                )))
            }
            _ => {}
        }

        let envelope: DataEnvelope<T> = resp
            .json()
            .await
            .map_err(|e| FindashError::Api(format!("Invalid {} response: {}", what, e)))?;

        debug!(count = envelope.data.len(), "Fetched {}", what);
        Ok(envelope.data)
    }
}
