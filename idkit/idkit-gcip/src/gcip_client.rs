use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use idkit_core::{
    BoxError, IdentityAdmin,
    contracts::{CustomClaims, UserRecord},
};

use crate::contracts::{
    AccessToken, ApiError, LookupAccountRequest, LookupAccountResponse, OauthClaims,
    ServiceAccount, UpdateAccountRequest, UpdateAccountResponse,
};

pub const DEFAULT_API_URL: &str = "https://identitytoolkit.googleapis.com/v1";

const IDENTITY_TOOLKIT_SCOPE: &str = "https://www.googleapis.com/auth/identitytoolkit";

#[derive(Clone)]
pub struct GcipClient {
    pub account: ServiceAccount,
    pub api_url: String,
    client: reqwest::Client,
    token_state: Arc<tokio::sync::Mutex<TokenState>>,
}

struct TokenState {
    access_token: String,
    token_type: String,
    expires_at: Option<DateTime<Utc>>,
}

impl GcipClient {
    pub fn new(account: &ServiceAccount, api_url: String) -> Self {
        Self {
            account: account.clone(),
            api_url,
            client: reqwest::Client::new(),
            token_state: Arc::new(tokio::sync::Mutex::new(TokenState {
                access_token: String::new(),
                token_type: "Bearer".to_string(),
                expires_at: None,
            })),
        }
    }

    pub async fn get_token(&self) -> Result<String, BoxError> {
        let refresh_skew = Duration::from_secs(5 * 60);
        let now = Utc::now();

        let mut state = self.token_state.lock().await;
        let needs_refresh = match state.expires_at {
            None => state.access_token.is_empty(),
            Some(exp) => state.access_token.is_empty() || (now + refresh_skew) >= exp,
        };
        if needs_refresh {
            let response = self.fetch_new_token().await?;
            let expires_at = now + Duration::from_secs(response.expires_in as u64);

            state.access_token = response.access_token;
            state.token_type = response.token_type;
            state.expires_at = Some(expires_at);
        }
        Ok(state.access_token.clone())
    }

    /// Signs a short-lived RS256 assertion with the credential's private key
    /// and exchanges it at the token endpoint.
    pub async fn fetch_new_token(&self) -> Result<AccessToken, BoxError> {
        let now = Utc::now();
        let claims = OauthClaims {
            iss: self.account.client_email.to_string(),
            scope: IDENTITY_TOOLKIT_SCOPE.to_owned(),
            aud: self.account.token_uri.to_string(),
            iat: now.timestamp(),
            exp: (now + std::time::Duration::from_secs(60 * 60)).timestamp(),
        };
        let jwt = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256),
            &claims,
            &jsonwebtoken::EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())?,
        )?;
        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", &jwt),
        ];
        let res = self
            .client
            .post(&self.account.token_uri)
            .form(&params)
            .send()
            .await?;

        let body = res.text().await?;
        let response: AccessToken = serde_json::from_str(&body)
            .map_err(|e| format!("token endpoint returned an unexpected body: {e}: {body}"))?;
        Ok(response)
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/projects/{}/accounts:{}",
            self.api_url, self.account.project_id, operation
        )
    }

    /// The platform wraps failures in an `{"error": {"message": ...}}`
    /// envelope; surface the message text, fall back to the raw body.
    fn api_error(status: reqwest::StatusCode, body: &str) -> BoxError {
        match serde_json::from_str::<ApiError>(body) {
            Ok(envelope) => format!("identity platform error: {}", envelope.error.message).into(),
            Err(_) => format!("identity platform error ({status}): {body}").into(),
        }
    }
}

#[async_trait]
impl IdentityAdmin for GcipClient {
    async fn set_custom_claims(&self, uid: &str, claims: &CustomClaims) -> Result<(), BoxError> {
        let body = UpdateAccountRequest::for_claims(uid, claims)?;

        let token = self
            .get_token()
            .await
            .map_err(|e| format!("no access token: {e}"))?;

        let res = self
            .client
            .post(self.endpoint("update"))
            .header("Authorization", "Bearer ".to_owned() + &token)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            return Err(Self::api_error(status, &err_text));
        }

        // The platform echoes the localId it mutated.
        let _ack: UpdateAccountResponse = res.json().await?;
        Ok(())
    }

    async fn get_user(&self, uid: &str) -> Result<UserRecord, BoxError> {
        let body = LookupAccountRequest {
            local_id: vec![uid.to_string()],
        };

        let token = self
            .get_token()
            .await
            .map_err(|e| format!("no access token: {e}"))?;

        let res = self
            .client
            .post(self.endpoint("lookup"))
            .header("Authorization", "Bearer ".to_owned() + &token)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            return Err(Self::api_error(status, &err_text));
        }

        let response: LookupAccountResponse = res.json().await?;
        let user = response
            .users
            .first()
            .ok_or_else(|| format!("no user record for {uid}"))?;

        user.to_view()
    }
}
