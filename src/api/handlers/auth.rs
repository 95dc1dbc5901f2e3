use std::sync::Arc;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::api::middleware::auth::{session_cookie, SessionAuth};
use crate::api::state::{AppState, AuthSettings};
use crate::auth::jwt::{create_admin_action_token, create_session_token};
use crate::domain::repositories::AdminGrantRepository;
use crate::infrastructure::repositories::SqliteAdminGrantRepository;

/// Form body carrying a password
#[derive(Debug, Deserialize)]
pub struct PasswordForm {
    pub password: Option<String>,
}

/// One-time admin action grant
#[derive(Debug, Serialize)]
pub struct AdminTokenResponse {
    pub admin_token: String,
    /// Action the token unlocks
    pub action: &'static str,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// Runs bcrypt verification off the async executor
async fn check_password<F, T>(auth: Arc<AuthSettings>, password: String, check: F) -> Result<T, ApiError>
where
    F: FnOnce(&AuthSettings, &str) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || check(&auth, &password))
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Password check failed: {}", e)))
}

/// Login prompt
///
/// GET /login
pub async fn login_page() -> Json<Value> {
    Json(json!({
        "message": "Login required",
        "fields": ["password"]
    }))
}

/// Exchange a password for a session cookie
///
/// POST /login
pub async fn login(
    State(auth): State<Arc<AuthSettings>>,
    Form(form): Form<PasswordForm>,
) -> Result<Response, ApiError> {
    let password = form.password.unwrap_or_default();
    let role = check_password(auth.clone(), password, |auth, pw| {
        auth.credentials.authenticate(pw)
    })
    .await?
    .ok_or_else(|| {
        tracing::info!("Login rejected");
        ApiError::unauthorized("Invalid password")
    })?;

    let token = create_session_token(role, &auth.jwt_secret, auth.session_ttl)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    tracing::info!("Login succeeded as {:?}", role);

    Ok((
        [(SET_COOKIE, session_cookie(&token, auth.session_ttl))],
        Redirect::to("/"),
    )
        .into_response())
}

/// Exchange the admin password for a one-time shuffle token
///
/// POST /verify-admin
pub async fn verify_admin(
    State(state): State<AppState>,
    SessionAuth(role): SessionAuth,
    Form(form): Form<PasswordForm>,
) -> Result<Json<AdminTokenResponse>, ApiError> {
    let password = form.password.unwrap_or_default();
    let valid = check_password(state.auth.clone(), password, |auth, pw| {
        auth.credentials.is_admin_password(pw)
    })
    .await?;

    if !valid {
        tracing::info!("Admin verification rejected for {:?} session", role);
        return Err(ApiError::unauthorized("Invalid admin password"));
    }

    let issued = create_admin_action_token(&state.auth.jwt_secret, state.auth.admin_token_ttl)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    let grants = SqliteAdminGrantRepository::new(state.pool.clone());
    grants.issue(issued.jti, issued.expires_at).await?;

    tracing::info!(jti = %issued.jti, "Admin action token issued");

    Ok(Json(AdminTokenResponse {
        admin_token: issued.token,
        action: "shuffle",
        expires_in: state.auth.admin_token_ttl.num_seconds(),
    }))
}

