#[cfg(test)]
mod tests {
    use idkit_core::contracts::{CustomClaims, MAX_CLAIMS_PAYLOAD_BYTES};
    use serde_json::{Value, json};

    #[test]
    fn test_admin_payload_shape() {
        let claims = CustomClaims::admin(true);
        let wire = claims.to_wire_string().unwrap();

        assert_eq!(wire, r#"{"admin":true}"#);
        assert!(claims.is_admin());
    }

    #[test]
    fn test_revoked_payload_is_not_admin() {
        let claims = CustomClaims::admin(false);

        assert_eq!(claims.to_wire_string().unwrap(), r#"{"admin":false}"#);
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_reserved_claim_name_rejected() {
        let claims = CustomClaims::admin(true).set("iss", json!("https://evil.example"));

        let err = claims.validate().unwrap_err();
        assert!(err.to_string().contains("reserved"));
        assert!(err.to_string().contains("iss"));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let blob = "x".repeat(MAX_CLAIMS_PAYLOAD_BYTES);
        let claims = CustomClaims::default().set("notes", Value::String(blob));

        let err = claims.validate().unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn test_wire_string_parsing() {
        let claims = CustomClaims::from_wire_string(r#"{"admin":true,"tier":"gold"}"#).unwrap();

        assert!(claims.is_admin());
        assert_eq!(claims.0.get("tier"), Some(&json!("gold")));
    }

    #[test]
    fn test_wire_string_rejects_non_object() {
        assert!(CustomClaims::from_wire_string("[1,2,3]").is_err());
    }
}
