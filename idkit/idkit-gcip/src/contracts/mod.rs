pub mod service_account;
pub use service_account::ServiceAccount;

pub mod oauth_claims;
pub use oauth_claims::OauthClaims;

pub mod models;
pub use models::{
    AccessToken,
    ApiError,
    ApiUser,
    LookupAccountRequest,
    LookupAccountResponse,
    UpdateAccountRequest,
    UpdateAccountResponse,
};
