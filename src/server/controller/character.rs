use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CharacterFieldsDto},
    },
    server::{
        controller::not_found,
        error::AppError,
        model::{
            character::{Character, CharacterFields},
            resource::Resource,
        },
        service::resource::ResourceService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// GET /character - List all characters
///
/// Ordered by ID, no pagination or filtering.
///
/// # Returns
/// - `200 OK` - JSON array of characters
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Character>::new(&state.db);

    let characters = service.list().await?;

    Ok((
        StatusCode::OK,
        Json(characters.into_iter().map(Character::into_dto).collect::<Vec<_>>()),
    ))
}

/// GET /character/{id} - Get a character by ID
///
/// # Returns
/// - `200 OK` - The character
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No character with this ID
#[utoipa::path(
    get,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Character>::new(&state.db);

    match service.get_by_id(id).await? {
        Some(character) => Ok((StatusCode::OK, Json(character.into_dto()))),
        None => Err(not_found::<Character>(id)),
    }
}

/// POST /character - Create a character
///
/// Absent fields are stored empty and keys outside the schema are ignored.
///
/// # Returns
/// - `201 Created` - The created character including its store-assigned ID
/// - `400 Bad Request` - Malformed JSON body, blank name or a count above the column limit
/// - `422 Unprocessable Entity` - Negative count or wrongly typed value
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = CharacterFieldsDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 422, description = "Invalid character fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CharacterFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Character>::new(&state.db);

    let params = CharacterFields::from_dto(payload)?;

    let character = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// PUT /character/{id} - Update the supplied fields of a character
///
/// Absent fields keep their values and `null` clears a field.
/// Supplying `tags` replaces the whole list.
///
/// # Returns
/// - `200 OK` - The character after the update
/// - `400 Bad Request` - ID is not an integer, or the body fails as it would on create
/// - `404 Not Found` - No character with this ID
/// - `422 Unprocessable Entity` - Negative count or wrongly typed value
#[utoipa::path(
    put,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = CharacterFieldsDto,
    responses(
        (status = 200, description = "Successfully updated character", body = CharacterDto),
        (status = 400, description = "Invalid ID or character data", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 422, description = "Invalid character fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<CharacterFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Character>::new(&state.db);

    let params = CharacterFields::from_dto(payload)?;

    match service.update(id, params).await? {
        Some(character) => Ok((StatusCode::OK, Json(character.into_dto()))),
        None => Err(not_found::<Character>(id)),
    }
}

/// DELETE /character/{id} - Delete a character
///
/// # Returns
/// - `200 OK` - The character as it was before deletion
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No character with this ID, including one already deleted
#[utoipa::path(
    delete,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted character", body = CharacterDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Character>::new(&state.db);

    match service.delete(id).await? {
        Some(character) => Ok((StatusCode::OK, Json(character.into_dto()))),
        None => Err(not_found::<Character>(id)),
    }
}
