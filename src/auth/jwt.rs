// JWT token creation and verification
// Session tokens travel in the auth cookie; admin action tokens are one-shot
// grants exchanged for the admin password

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// What a token may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Login session carried by the auth cookie
    Session,
    /// Unlocks a single privileged action
    AdminAction,
}

/// JWT claims structure
///
/// # Fields
/// * `sub` - Role granted by the token
/// * `kind` - Session or admin action
/// * `exp` - Expiry time (seconds since epoch)
/// * `jti` - Grant id, admin action tokens only
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Role,
    pub kind: TokenKind,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<Uuid>,
}

/// A freshly signed admin action token
#[derive(Debug, Clone)]
pub struct AdminActionToken {
    pub token: String,
    pub jti: Uuid,
    pub expires_at: DateTime<Utc>,
}

fn sign(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

fn verify(token: &str, secret: &str, kind: TokenKind) -> Result<Claims, String> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())?;

    if claims.kind != kind {
        return Err(format!("Expected a {:?} token", kind));
    }

    Ok(claims)
}

/// Creates a session token for a role
///
/// # Example
/// ```
/// use chrono::Duration;
/// use roster_api::auth::jwt::{create_session_token, verify_session_token};
/// use roster_api::auth::Role;
///
/// let token = create_session_token(Role::User, "secret", Duration::hours(6)).unwrap();
/// let claims = verify_session_token(&token, "secret").unwrap();
/// assert_eq!(claims.sub, Role::User);
/// ```
pub fn create_session_token(role: Role, secret: &str, ttl: Duration) -> Result<String, String> {
    let expiry = Utc::now() + ttl;
    let claims = Claims {
        sub: role,
        kind: TokenKind::Session,
        exp: expiry.timestamp() as usize,
        jti: None,
    };

    sign(&claims, secret)
}

/// Verifies a session token; admin action tokens are rejected
pub fn verify_session_token(token: &str, secret: &str) -> Result<Claims, String> {
    verify(token, secret, TokenKind::Session)
}

/// Creates a one-time admin action token with a fresh grant id
pub fn create_admin_action_token(secret: &str, ttl: Duration) -> Result<AdminActionToken, String> {
    let jti = Uuid::new_v4();
    let expires_at = Utc::now() + ttl;
    let claims = Claims {
        sub: Role::Admin,
        kind: TokenKind::AdminAction,
        exp: expires_at.timestamp() as usize,
        jti: Some(jti),
    };

    Ok(AdminActionToken {
        token: sign(&claims, secret)?,
        jti,
        expires_at,
    })
}

/// Verifies an admin action token and returns its grant id
///
/// The grant itself still has to be consumed from storage.
pub fn verify_admin_action_token(token: &str, secret: &str) -> Result<Uuid, String> {
    let claims = verify(token, secret, TokenKind::AdminAction)?;
    claims
        .jti
        .ok_or_else(|| "Admin action token has no grant id".to_string())
}
