//! OpenAPI document for the character API, served as JSON.

use crate::error::{ErrorBody, ErrorDetail, FieldViolation};
use crate::handlers::character;
use crate::model::{Character, CharacterFields, CharacterPatch, OneOrMany};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Moranguinho API", version = "0.0.1"),
    paths(
        character::list,
        character::read,
        character::create,
        character::replace,
        character::patch,
        character::delete,
    ),
    components(schemas(
        Character,
        CharacterFields,
        CharacterPatch,
        OneOrMany,
        ErrorBody,
        ErrorDetail,
        FieldViolation,
    )),
    tags((name = "characters", description = "Character records"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
