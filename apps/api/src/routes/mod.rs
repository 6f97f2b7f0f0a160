pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;
use crate::{advice, catalog, matching, pages, profile, session};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static surface
        .route("/api/v1/pages", get(pages::handlers::handle_navigation))
        .route("/api/v1/pages/:slug", get(pages::handlers::handle_page))
        .route(
            "/api/v1/programs",
            get(catalog::handlers::handle_list_programs),
        )
        // Session lifecycle
        .route(
            "/api/v1/sessions",
            post(session::handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            delete(session::handlers::handle_end_session),
        )
        // Per-session profile, matching and advice
        .route(
            "/api/v1/sessions/:id/profile",
            get(profile::handlers::handle_get_profile)
                .put(profile::handlers::handle_save_profile)
                .delete(profile::handlers::handle_clear_profile),
        )
        .route(
            "/api/v1/sessions/:id/recommendations",
            get(matching::handlers::handle_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/advice",
            post(advice::handlers::handle_advice),
        )
        .with_state(state)
}
