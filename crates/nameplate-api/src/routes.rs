//! HTTP routes for creating and reading people.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/users",
            post(handlers::create_person).get(handlers::list_people),
        )
        .route("/users/preview", post(handlers::preview))
        .route("/users/{id}", get(handlers::get_person))
        .with_state(state)
}
