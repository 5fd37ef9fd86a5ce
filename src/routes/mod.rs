//! Router assembly: character CRUD, operational endpoints, OpenAPI document, and the middleware stack.

mod character;
mod common;
mod docs;

pub use character::character_routes;
pub use common::{common_routes, common_routes_with_ready};
pub use docs::{docs_routes, ApiDoc};

use crate::config::AppConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router as served by the binary.
///
/// The body limit is enforced by the extractors through `DefaultBodyLimit`, so an
/// over-limit body is rejected as a `JsonRejection` and answered with the JSON error envelope.
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .merge(character_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.body_limit_bytes)),
        )
}
