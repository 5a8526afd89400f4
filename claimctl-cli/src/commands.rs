use idkit_core::contracts::{CustomClaims, UserRecord};
use idkit_core::{BoxError, IdentityAdmin};

/// The two mutations the tool knows. Each maps to exactly one
/// `set_custom_claims` attempt; there is no retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClaimOp {
    Grant,
    Revoke,
}

impl ClaimOp {
    pub fn payload(&self) -> CustomClaims {
        CustomClaims::admin(matches!(self, ClaimOp::Grant))
    }

    pub fn verb(&self) -> &'static str {
        match self {
            ClaimOp::Grant => "granted to",
            ClaimOp::Revoke => "revoked from",
        }
    }
}

/// Issues the single mutation and renders the confirmation line. The
/// returned message always contains the target uid.
pub async fn apply_claim(
    client: &dyn IdentityAdmin,
    op: ClaimOp,
    uid: &str,
) -> Result<String, BoxError> {
    let claims = op.payload();
    client.set_custom_claims(uid, &claims).await?;
    Ok(format!("Admin claim {} user {}", op.verb(), uid))
}

pub async fn show_user(client: &dyn IdentityAdmin, uid: &str) -> Result<String, BoxError> {
    let user = client.get_user(uid).await?;
    Ok(render_user(&user))
}

fn render_user(user: &UserRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("uid:      {}\n", user.uid));
    if let Some(email) = &user.email {
        out.push_str(&format!("email:    {}\n", email));
    }
    if let Some(name) = &user.display_name {
        out.push_str(&format!("name:     {}\n", name));
    }
    out.push_str(&format!(
        "disabled: {}\n",
        if user.disabled { "yes" } else { "no" }
    ));
    match &user.custom_claims {
        Some(claims) if !claims.is_empty() => {
            let rendered =
                serde_json::to_string_pretty(claims).unwrap_or_else(|_| "<unprintable>".to_string());
            out.push_str(&format!("claims:   {}\n", rendered));
        }
        _ => out.push_str("claims:   (none)\n"),
    }
    out
}
