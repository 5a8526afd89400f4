//! The service-account credential.

use std::path::Path;

use serde::{Deserialize, Serialize};

use idkit_core::BoxError;

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// Credential file which stores the administrative principal's project,
/// client email and private key. Extra fields in the JSON are ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct ServiceAccount {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,

    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccount {
    /// Typed load of the credential JSON. Read failures and parse failures
    /// carry distinct messages; both abort before any network traffic.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoxError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("unable to read credential file {}: {}", path.display(), e))?;
        let account: ServiceAccount = serde_json::from_str(&raw).map_err(|e| {
            format!(
                "credential file {} is not a valid service account: {}",
                path.display(),
                e
            )
        })?;
        Ok(account)
    }
}
