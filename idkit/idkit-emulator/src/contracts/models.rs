use serde::{Deserialize, Serialize};

use idkit_core::BoxError;
use idkit_core::contracts::{CustomClaims, UserRecord};

/// Same Identity Toolkit shapes the production surface speaks; the emulator
/// accepts them unauthenticated apart from the static owner token.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct EmulatorUpdateRequest {
    #[serde(rename = "localId")]
    pub local_id: String,

    #[serde(rename = "customAttributes")]
    pub custom_attributes: String,
}

impl EmulatorUpdateRequest {
    pub fn for_claims(uid: &str, claims: &CustomClaims) -> Result<Self, BoxError> {
        Ok(Self {
            local_id: uid.to_string(),
            custom_attributes: claims.to_wire_string()?,
        })
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct EmulatorLookupRequest {
    #[serde(rename = "localId")]
    pub local_id: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct EmulatorLookupResponse {
    #[serde(default)]
    pub users: Vec<EmulatorUser>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct EmulatorUser {
    #[serde(rename = "localId")]
    pub local_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(rename = "customAttributes", default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<String>,
}

impl EmulatorUser {
    pub fn to_view(&self) -> Result<UserRecord, BoxError> {
        let custom_claims = match &self.custom_attributes {
            Some(raw) => Some(CustomClaims::from_wire_string(raw)?),
            None => None,
        };

        Ok(UserRecord {
            uid: self.local_id.clone(),
            email: self.email.clone(),
            display_name: None,
            disabled: self.disabled,
            custom_claims,
        })
    }
}
