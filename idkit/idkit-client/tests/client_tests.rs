use std::sync::Arc;

use idkit_client::{IdkitClientConfig, IdkitClientService};
use idkit_core::contracts::CustomClaims;
use idkit_core::{IdentityAdmin, MockIdentityAdmin};

#[tokio::test]
async fn test_backend_resolution() {
    let config = IdkitClientConfig {
        emulator_host: Some("127.0.0.1:9099".to_string()),
        ..Default::default()
    };
    let service = IdkitClientService::new(config);

    // Test resolving the emulator
    let client = service.get_client("emulator").await;
    assert!(client.is_ok());

    // Test resolving an unknown backend
    let client = service.get_client("unknown").await;
    assert!(client.is_err());
}

#[tokio::test]
async fn test_active_backend_selection() {
    let service = IdkitClientService::new(IdkitClientConfig::default());
    assert_eq!(service.active_backend(), "gcip");

    let config = IdkitClientConfig {
        emulator_host: Some("127.0.0.1:9099".to_string()),
        ..Default::default()
    };
    let service = IdkitClientService::new(config);
    assert_eq!(service.active_backend(), "emulator");
}

#[tokio::test]
async fn test_gcip_requires_credential() {
    let service = IdkitClientService::new(IdkitClientConfig::default());

    let result = service
        .set_custom_claims("abc123", &CustomClaims::admin(true))
        .await;

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("GCIP service account not configured")
    );
}

#[tokio::test]
async fn test_delegation_to_injected_backend() {
    let service = IdkitClientService::new(IdkitClientConfig::default());

    let mut mock = MockIdentityAdmin::new();
    mock.expect_set_custom_claims()
        .withf(|uid, claims| uid == "abc123" && claims.is_admin())
        .times(1)
        .returning(|_, _| Ok(()));

    service.add_client("gcip", Arc::new(mock)).await;

    let result = service
        .set_custom_claims("abc123", &CustomClaims::admin(true))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delegation_surfaces_backend_error() {
    let service = IdkitClientService::new(IdkitClientConfig::default());

    let mut mock = MockIdentityAdmin::new();
    mock.expect_get_user()
        .returning(|_| Err("identity platform error: USER_NOT_FOUND".into()));

    service.add_client("gcip", Arc::new(mock)).await;

    let err = service.get_user("ghost").await.unwrap_err();
    assert!(err.to_string().contains("USER_NOT_FOUND"));
}
