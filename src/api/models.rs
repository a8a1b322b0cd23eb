use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::models::{Account, Finding, Priority};

/// Every list endpoint wraps its payload in a `data` array.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Managed account as returned by the accounts endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    #[serde(default)]
    pub org_id: String,
    #[serde(default)]
    pub name: String,
}

impl AccountRecord {
    pub fn into_account(self) -> Account {
        Account {
            org_id: self.org_id,
            name: self.name,
        }
    }
}

/// Finding as returned by the findings endpoint. Every field is optional on
/// the wire; missing or malformed values degrade to empty/zero rather than
/// failing the fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct FindingRecord {
    #[serde(default)]
    pub finding_id: String,
    #[serde(default)]
    pub org_id: String,
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub name: String,
    pub priority: Option<i64>,
    #[serde(default)]
    pub status_name: String,
    #[serde(default)]
    pub type_name: String,
    pub resolution_name: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

impl FindingRecord {
    pub fn into_finding(self) -> Finding {
        let priority = self
            .priority
            .and_then(|p| u8::try_from(p).ok())
            .unwrap_or(0);
        Finding {
            finding_id: self.finding_id,
            org_id: self.org_id,
            org_name: self.org_name,
            name: self.name,
            priority: Priority(priority),
            status_name: self.status_name,
            type_name: self.type_name,
            resolution_name: self.resolution_name.filter(|r| !r.is_empty()),
            created: self.created.as_deref().and_then(parse_timestamp),
            modified: self.modified.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Parse the timestamp formats the API has been seen to emit: RFC 3339, and
/// naive `YYYY-MM-DD HH:MM:SS` (with or without the `T`) treated as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    None
}
