// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use handlers::{auth, events, participants};
use middleware::auth::require_login;
use state::AppState;

/// Builds the full HTTP surface
///
/// Every route except `/login` sits behind the login middleware, including
/// unknown paths.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Auth routes
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/verify-admin", post(auth::verify_admin))
        // Event routes
        .route("/", get(events::list_events))
        .route("/event/create", post(events::create_event))
        .route(
            "/event/:id",
            get(events::event_dashboard).delete(events::delete_event),
        )
        .route("/event/:id/register", post(events::register_participant))
        .route("/event/:id/shuffle", post(events::shuffle_teams))
        // Participant routes
        .route(
            "/participant/:id/move",
            post(participants::move_participant),
        )
        .fallback(handlers::not_found)
        // Middleware
        .layer(from_fn_with_state(state.auth.clone(), require_login))
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(state)
}
