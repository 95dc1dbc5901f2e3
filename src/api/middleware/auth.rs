use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header::COOKIE, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Duration;

use crate::api::errors::ApiError;
use crate::api::state::AuthSettings;
use crate::auth::jwt::verify_session_token;
use crate::auth::Role;

/// Cookie carrying the session token
pub const AUTH_COOKIE_NAME: &str = "roster_auth";

/// Path that stays reachable without a session
pub const LOGIN_PATH: &str = "/login";

/// Authenticated session attached to the request by [`require_login`]
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub role: Role,
}

/// Why an auth extractor refused the request
#[derive(Debug)]
pub enum AuthRejection {
    /// No usable session: send the caller to the login prompt
    Unauthenticated,
    /// Logged in, but not an administrator
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
            AuthRejection::Forbidden => {
                ApiError::forbidden("Admin privileges required").into_response()
            }
        }
    }
}

/// Reads a cookie value from the request headers
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Builds the `Set-Cookie` value for a session token
pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        AUTH_COOKIE_NAME,
        token,
        ttl.num_seconds()
    )
}

fn session_from_headers(headers: &HeaderMap, auth: &AuthSettings) -> Option<Session> {
    let token = read_cookie(headers, AUTH_COOKIE_NAME)?;

    match verify_session_token(token, &auth.jwt_secret) {
        Ok(claims) => Some(Session { role: claims.sub }),
        Err(e) => {
            tracing::debug!("Rejected session cookie: {}", e);
            None
        }
    }
}

/// Login gate applied to the whole router
///
/// Requests without a valid session cookie are redirected to `/login`;
/// the login page itself is always reachable.
pub async fn require_login(
    State(auth): State<Arc<AuthSettings>>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.uri().path() == LOGIN_PATH {
        return next.run(req).await;
    }

    match session_from_headers(req.headers(), &auth) {
        Some(session) => {
            req.extensions_mut().insert(session);
            next.run(req).await
        }
        None => Redirect::to(LOGIN_PATH).into_response(),
    }
}

/// Session extractor for any authenticated role
///
/// Usage:
/// ```rust,ignore
/// async fn handler(SessionAuth(role): SessionAuth) -> String {
///     format!("Hello {:?}", role)
/// }
/// ```
pub struct SessionAuth(pub Role);

#[async_trait]
impl<S> FromRequestParts<S> for SessionAuth
where
    Arc<AuthSettings>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(SessionAuth(session.role));
        }

        let auth = Arc::<AuthSettings>::from_ref(state);
        session_from_headers(&parts.headers, &auth)
            .map(|session| SessionAuth(session.role))
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Admin-only extractor: user sessions get 403, never a redirect
pub struct AdminAuth;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    Arc<AuthSettings>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionAuth(role) = SessionAuth::from_request_parts(parts, state).await?;

        if role.is_admin() {
            Ok(AdminAuth)
        } else {
            tracing::info!("Admin-only action refused for {:?} session", role);
            Err(AuthRejection::Forbidden)
        }
    }
}
