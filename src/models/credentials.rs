use serde::{Deserialize, Serialize};

/// API credentials kept in the encrypted store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "APIKey")]
    pub api_key: String,
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            employee_id: employee_id.into(),
        }
    }

    /// First five characters of the API key followed by an ellipsis.
    pub fn masked_api_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(5).collect();
        format!("{prefix}...")
    }
}
