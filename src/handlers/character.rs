//! Character CRUD handlers: list, read, create, replace, patch, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{JsonBody, RecordId};
use crate::model::{Character, CharacterFields, CharacterPatch};
use crate::service::{CharacterStore, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/characters",
    tag = "characters",
    responses((status = 200, description = "All characters", body = Vec<Character>))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CharacterStore::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = Character),
        (status = 404, description = "No character with this id", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let row = CharacterStore::get(&state.pool, id).await?;
    Ok((StatusCode::OK, Json(row)))
}

#[utoipa::path(
    post,
    path = "/characters",
    tag = "characters",
    request_body = CharacterFields,
    responses(
        (status = 201, description = "Created character with its id", body = Character),
        (status = 422, description = "Invalid payload", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::character_fields(body)?;
    let row = CharacterStore::create(&state.pool, &fields).await?;
    tracing::info!(id = row.id, name = %row.fields.name, "character created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    put,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = i64, Path, description = "Character id")),
    request_body = CharacterFields,
    responses(
        (status = 200, description = "Replaced character", body = Character),
        (status = 404, description = "No character with this id", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody),
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::character_fields(body)?;
    let row = CharacterStore::replace(&state.pool, id, &fields).await?;
    tracing::info!(id, "character replaced");
    Ok((StatusCode::OK, Json(row)))
}

#[utoipa::path(
    patch,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = i64, Path, description = "Character id")),
    request_body = CharacterPatch,
    responses(
        (status = 200, description = "Updated character", body = Character),
        (status = 404, description = "No character with this id", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody),
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let patch = RequestValidator::character_patch(body)?;
    let row = CharacterStore::patch(&state.pool, id, &patch).await?;
    tracing::info!(id, "character patched");
    Ok((StatusCode::OK, Json(row)))
}

#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = i64, Path, description = "Character id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No character with this id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    CharacterStore::delete(&state.pool, id).await?;
    tracing::info!(id, "character deleted");
    Ok(StatusCode::NO_CONTENT)
}
