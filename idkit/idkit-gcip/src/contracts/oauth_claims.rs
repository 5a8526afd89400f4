use serde::{Deserialize, Serialize};

/// Claims of the signed assertion exchanged for an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OauthClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}
