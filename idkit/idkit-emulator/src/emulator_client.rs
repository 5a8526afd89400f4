use async_trait::async_trait;

use idkit_core::{
    BoxError, IdentityAdmin,
    contracts::{CustomClaims, UserRecord},
};

use crate::contracts::{
    EmulatorLookupRequest, EmulatorLookupResponse, EmulatorUpdateRequest,
};

/// The local Auth emulator trusts any bearer token that says "owner".
const OWNER_TOKEN: &str = "Bearer owner";

pub struct EmulatorClient {
    api_url: String,
    project_id: String,
    client: reqwest::Client,
}

impl EmulatorClient {
    /// `host` is the bare `host:port` the emulator listens on.
    pub fn new(host: String, project_id: String) -> Self {
        Self {
            api_url: format!("http://{host}/identitytoolkit.googleapis.com/v1"),
            project_id,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/projects/{}/accounts:{}",
            self.api_url, self.project_id, operation
        )
    }
}

#[async_trait]
impl IdentityAdmin for EmulatorClient {
    async fn set_custom_claims(&self, uid: &str, claims: &CustomClaims) -> Result<(), BoxError> {
        let body = EmulatorUpdateRequest::for_claims(uid, claims)?;

        let res = self
            .client
            .post(self.endpoint("update"))
            .header("Authorization", OWNER_TOKEN)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let err_text = res.text().await.unwrap_or_default();
            return Err(format!("emulator error: {}", err_text).into());
        }

        Ok(())
    }

    async fn get_user(&self, uid: &str) -> Result<UserRecord, BoxError> {
        let body = EmulatorLookupRequest {
            local_id: vec![uid.to_string()],
        };

        let res = self
            .client
            .post(self.endpoint("lookup"))
            .header("Authorization", OWNER_TOKEN)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let err_text = res.text().await.unwrap_or_default();
            return Err(format!("emulator error: {}", err_text).into());
        }

        let response: EmulatorLookupResponse = res.json().await?;
        let user = response
            .users
            .first()
            .ok_or_else(|| format!("no user record for {uid}"))?;

        user.to_view()
    }
}
