use serde::{Deserialize, Serialize};

/// A managed (MSP) account visible to the API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub org_id: String,
    pub name: String,
}
