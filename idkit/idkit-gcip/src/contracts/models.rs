use serde::{Deserialize, Serialize};

use idkit_core::BoxError;
use idkit_core::contracts::{CustomClaims, UserRecord};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: usize,
}

/// Body of `accounts:update`. The claims object is carried as a JSON-encoded
/// string in `customAttributes`, not as a nested object.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct UpdateAccountRequest {
    #[serde(rename = "localId")]
    pub local_id: String,

    #[serde(rename = "customAttributes")]
    pub custom_attributes: String,
}

impl UpdateAccountRequest {
    pub fn for_claims(uid: &str, claims: &CustomClaims) -> Result<Self, BoxError> {
        Ok(Self {
            local_id: uid.to_string(),
            custom_attributes: claims.to_wire_string()?,
        })
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct UpdateAccountResponse {
    #[serde(rename = "localId")]
    pub local_id: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LookupAccountRequest {
    #[serde(rename = "localId")]
    pub local_id: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct LookupAccountResponse {
    #[serde(default)]
    pub users: Vec<ApiUser>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct ApiUser {
    #[serde(rename = "localId")]
    pub local_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(rename = "customAttributes", default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<String>,
}

impl ApiUser {
    pub fn to_view(&self) -> Result<UserRecord, BoxError> {
        let custom_claims = match &self.custom_attributes {
            Some(raw) => Some(CustomClaims::from_wire_string(raw)?),
            None => None,
        };

        Ok(UserRecord {
            uid: self.local_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            disabled: self.disabled,
            custom_claims,
        })
    }
}

/// Error envelope the platform returns on non-2xx responses.
#[derive(Clone, Deserialize, Debug)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Clone, Deserialize, Debug)]
pub struct ApiErrorBody {
    pub message: String,

    #[serde(default)]
    pub code: i64,
}
