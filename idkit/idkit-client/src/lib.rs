use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use idkit_core::{
    BoxError, IdentityAdmin,
    contracts::{CustomClaims, UserRecord},
    logging::IAuditLogger,
};
#[cfg(feature = "emulator")]
use idkit_emulator::emulator_client::EmulatorClient;
#[cfg(feature = "gcip")]
use idkit_gcip::gcip_client::GcipClient;
#[cfg(feature = "gcip")]
pub use idkit_gcip::contracts::ServiceAccount;

/// Configuration for the idkit client service.
/// This struct holds the credentials and endpoints for the supported backends.
#[derive(Debug, Clone, Default)]
pub struct IdkitClientConfig {
    /// Base URL of the Identity Toolkit API; defaults to the public endpoint.
    #[cfg(feature = "gcip")]
    pub gcip_api_url: Option<String>,
    /// Service-account credential for the production backend.
    #[cfg(feature = "gcip")]
    pub gcip_sa: Option<ServiceAccount>,
    /// `host:port` of a local Auth emulator. When set, the emulator backend
    /// is the active one and no credential is required.
    #[cfg(feature = "emulator")]
    pub emulator_host: Option<String>,
    /// Project to target on the emulator.
    #[cfg(feature = "emulator")]
    pub emulator_project: Option<String>,
    /// Optional audit logger for requests and responses.
    pub logger: Option<Arc<dyn IAuditLogger>>,
}

/// A service that resolves and caches identity-admin backends.
///
/// `IdkitClientService` implements the `IdentityAdmin` trait itself and
/// delegates every call to the active backend ("gcip" in production,
/// "emulator" when an emulator host is configured), logging each request
/// and outcome through the configured audit logger.
pub struct IdkitClientService {
    config: IdkitClientConfig,
    clients: RwLock<HashMap<String, Arc<dyn IdentityAdmin>>>,
    logger: Option<Arc<dyn IAuditLogger>>,
}

impl IdkitClientService {
    /// Creates a new `IdkitClientService` with the given configuration.
    pub fn new(config: IdkitClientConfig) -> Self {
        let logger = config.logger.clone();
        Self {
            config,
            clients: RwLock::new(HashMap::new()),
            logger,
        }
    }

    /// The backend an operation will be routed to.
    pub fn active_backend(&self) -> &'static str {
        #[cfg(feature = "emulator")]
        if self.config.emulator_host.is_some() {
            return "emulator";
        }
        "gcip"
    }

    /// Retrieves an existing client for the specified backend or initializes
    /// a new one.
    ///
    /// Supported backends: "gcip", "emulator".
    pub async fn get_client(&self, backend: &str) -> Result<Arc<dyn IdentityAdmin>, BoxError> {
        {
            let clients = self.clients.read().await;
            if let Some(client) = clients.get(backend) {
                return Ok(client.clone());
            }
        }

        #[allow(unused_variables)]
        let client: Arc<dyn IdentityAdmin> = match backend {
            #[cfg(feature = "gcip")]
            "gcip" => {
                let sa = self
                    .config
                    .gcip_sa
                    .as_ref()
                    .ok_or("GCIP service account not configured")?;
                let url = self
                    .config
                    .gcip_api_url
                    .as_deref()
                    .unwrap_or(idkit_gcip::gcip_client::DEFAULT_API_URL);
                Arc::new(GcipClient::new(sa, url.to_string()))
            }
            #[cfg(feature = "emulator")]
            "emulator" => {
                let host = self
                    .config
                    .emulator_host
                    .as_deref()
                    .ok_or("Emulator host not configured")?;
                let project = self
                    .config
                    .emulator_project
                    .as_deref()
                    .unwrap_or("demo-project");
                Arc::new(EmulatorClient::new(host.to_string(), project.to_string()))
            }
            _ => return Err(format!("Unknown or disabled backend: {}", backend).into()),
        };

        #[allow(unreachable_code)]
        {
            let mut clients = self.clients.write().await;
            clients.insert(backend.to_string(), client.clone());
            Ok(client)
        }
    }

    /// Adds a client for a specific backend.
    pub async fn add_client(&self, backend: &str, client: Arc<dyn IdentityAdmin>) {
        let mut clients = self.clients.write().await;
        clients.insert(backend.to_string(), client);
    }
}

#[async_trait]
impl IdentityAdmin for IdkitClientService {
    async fn set_custom_claims(&self, uid: &str, claims: &CustomClaims) -> Result<(), BoxError> {
        let client = self.get_client(self.active_backend()).await?;

        if let Some(logger) = &self.logger {
            logger.log_request(
                "set_custom_claims",
                uid,
                serde_json::to_value(claims).unwrap_or(serde_json::Value::Null),
            );
        }

        match client.set_custom_claims(uid, claims).await {
            Ok(()) => {
                if let Some(logger) = &self.logger {
                    logger.log_response(
                        "set_custom_claims",
                        uid,
                        serde_json::json!({ "localId": uid }),
                    );
                }
                Ok(())
            }
            Err(e) => {
                if let Some(logger) = &self.logger {
                    logger.log_failure("set_custom_claims", uid, &e.to_string());
                }
                Err(e)
            }
        }
    }

    async fn get_user(&self, uid: &str) -> Result<UserRecord, BoxError> {
        let client = self.get_client(self.active_backend()).await?;

        if let Some(logger) = &self.logger {
            logger.log_request("get_user", uid, serde_json::Value::Null);
        }

        match client.get_user(uid).await {
            Ok(user) => {
                if let Some(logger) = &self.logger {
                    logger.log_response(
                        "get_user",
                        uid,
                        serde_json::to_value(&user).unwrap_or(serde_json::Value::Null),
                    );
                }
                Ok(user)
            }
            Err(e) => {
                if let Some(logger) = &self.logger {
                    logger.log_failure("get_user", uid, &e.to_string());
                }
                Err(e)
            }
        }
    }
}
