use idkit_core::IdentityAdmin;
use idkit_core::contracts::CustomClaims;
use idkit_emulator::emulator_client::EmulatorClient;

#[tokio::test]
#[ignore] // Ignore by default as it requires a running Auth emulator on 9099
async fn test_emulator_set_and_lookup_roundtrip() {
    let client = EmulatorClient::new("127.0.0.1:9099".to_string(), "demo-project".to_string());

    let uid = "integration-test-user";
    let result = client.set_custom_claims(uid, &CustomClaims::admin(true)).await;

    match result {
        Ok(()) => {
            let user = client.get_user(uid).await.expect("lookup after update");
            assert_eq!(user.uid, uid);
            assert!(user.custom_claims.expect("claims present").is_admin());
        }
        Err(e) => {
            // The emulator auto-creates nothing; an unknown uid is a
            // legitimate failure here, but the transport must have worked.
            panic!("Failed to call emulator: {}", e);
        }
    }
}
