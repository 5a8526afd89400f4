use async_trait::async_trait;
use mockall::automock;

use crate::contracts::{CustomClaims, UserRecord};
pub mod contracts;
pub mod logging;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[automock]
#[async_trait]
pub trait IdentityAdmin: Send + Sync {
    /// Replaces the custom claims object on one account. The platform keeps
    /// no history: whatever is sent becomes the account's whole claims set.
    async fn set_custom_claims(&self, uid: &str, claims: &CustomClaims) -> Result<(), BoxError>;

    async fn get_user(&self, uid: &str) -> Result<UserRecord, BoxError>;
}
