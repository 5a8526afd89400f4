use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::BoxError;

/// Claim names the platform reserves for its own tokens. A payload carrying
/// any of these never leaves the process.
pub const RESERVED_CLAIM_NAMES: &[&str] = &[
    "acr",
    "amr",
    "at_hash",
    "aud",
    "auth_time",
    "azp",
    "c_hash",
    "cnf",
    "exp",
    "firebase",
    "iat",
    "iss",
    "jti",
    "nbf",
    "nonce",
    "sub",
];

/// Serialized payload limit enforced by the platform, in bytes.
pub const MAX_CLAIMS_PAYLOAD_BYTES: usize = 1000;

/// Developer claims attached to an account's identity record.
///
/// On the wire the object travels as a JSON-encoded string inside the
/// `customAttributes` field, so construction and parsing go through
/// `to_wire_string` / `from_wire_string`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomClaims(pub Map<String, Value>);

impl CustomClaims {
    /// The payload of the core mutation: `{"admin": enabled}` and nothing else.
    pub fn admin(enabled: bool) -> Self {
        let mut claims = Map::new();
        claims.insert("admin".to_string(), Value::Bool(enabled));
        Self(claims)
    }

    pub fn set(mut self, name: impl Into<String>, value: Value) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.0.get("admin"), Some(Value::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Client-side mirror of the platform's rules: no reserved claim names,
    /// serialized payload at most `MAX_CLAIMS_PAYLOAD_BYTES`.
    pub fn validate(&self) -> Result<(), BoxError> {
        for name in self.0.keys() {
            if RESERVED_CLAIM_NAMES.contains(&name.as_str()) {
                return Err(format!("claim name '{}' is reserved by the platform", name).into());
            }
        }

        let serialized = serde_json::to_string(&self.0)?;
        if serialized.len() > MAX_CLAIMS_PAYLOAD_BYTES {
            return Err(format!(
                "claims payload is {} bytes, platform limit is {}",
                serialized.len(),
                MAX_CLAIMS_PAYLOAD_BYTES
            )
            .into());
        }

        Ok(())
    }

    /// Validates, then encodes the claims object as the JSON string the
    /// `customAttributes` field carries.
    pub fn to_wire_string(&self) -> Result<String, BoxError> {
        self.validate()?;
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn from_wire_string(raw: &str) -> Result<Self, BoxError> {
        let claims: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self(claims))
    }
}
