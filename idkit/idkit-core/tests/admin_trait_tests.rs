#[cfg(test)]
mod tests {
    use idkit_core::contracts::{CustomClaims, UserRecord};
    use idkit_core::{IdentityAdmin, MockIdentityAdmin};

    #[tokio::test]
    async fn test_mocked_set_custom_claims_sees_exact_payload() {
        let mut mock = MockIdentityAdmin::new();
        mock.expect_set_custom_claims()
            .withf(|uid, claims| {
                uid == "abc123" && claims.to_wire_string().unwrap() == r#"{"admin":true}"#
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let client: &dyn IdentityAdmin = &mock;
        client
            .set_custom_claims("abc123", &CustomClaims::admin(true))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_mocked_get_user() {
        let mut mock = MockIdentityAdmin::new();
        mock.expect_get_user().returning(|uid| {
            Ok(UserRecord {
                uid: uid.to_string(),
                ..Default::default()
            })
        });

        let user = mock.get_user("abc123").await.unwrap();
        assert_eq!(user.uid, "abc123");
        assert!(user.custom_claims.is_none());
    }
}
