//! Character CRUD routes.

use crate::handlers::character::{create, delete, list, patch, read, replace};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn character_routes(state: AppState) -> Router {
    Router::new()
        .route("/characters", get(list).post(create))
        .route(
            "/characters/:id",
            get(read).put(replace).patch(patch).delete(delete),
        )
        .with_state(state)
}
