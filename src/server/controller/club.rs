use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        club::{ClubDto, ClubFieldsDto},
    },
    server::{
        controller::not_found,
        error::AppError,
        model::{
            club::{Club, ClubFields},
            resource::Resource,
        },
        service::resource::ResourceService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// GET /club - List all clubs
///
/// Ordered by ID, no pagination or filtering.
///
/// # Returns
/// - `200 OK` - JSON array of clubs
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/club",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clubs", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Club>::new(&state.db);

    let clubs = service.list().await?;

    Ok((
        StatusCode::OK,
        Json(clubs.into_iter().map(Club::into_dto).collect::<Vec<_>>()),
    ))
}

/// GET /club/{id} - Get a club by ID
///
/// # Returns
/// - `200 OK` - The club
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No club with this ID
#[utoipa::path(
    get,
    path = "/club/{id}",
    tag = CLUB_TAG,
    params(
        ("id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved club", body = ClubDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Club>::new(&state.db);

    match service.get_by_id(id).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(not_found::<Club>(id)),
    }
}

/// POST /club - Create a club
///
/// Absent fields are stored empty and keys outside the schema are ignored.
/// Tier fields accept the rank letters `S` through `D`.
///
/// # Returns
/// - `201 Created` - The created club including its store-assigned ID
/// - `400 Bad Request` - Malformed JSON body, blank name or a member count above the column limit
/// - `422 Unprocessable Entity` - Unknown tier letter or negative member count
#[utoipa::path(
    post,
    path = "/club",
    tag = CLUB_TAG,
    request_body = ClubFieldsDto,
    responses(
        (status = 201, description = "Successfully created club", body = ClubDto),
        (status = 400, description = "Invalid club data", body = ErrorDto),
        (status = 422, description = "Invalid club fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ClubFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Club>::new(&state.db);

    let params = ClubFields::from_dto(payload)?;

    let club = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(club.into_dto())))
}

/// PUT /club/{id} - Update the supplied fields of a club
///
/// Absent fields keep their values and `null` clears a field.
///
/// # Returns
/// - `200 OK` - The club after the update
/// - `400 Bad Request` - ID is not an integer, or the body fails as it would on create
/// - `404 Not Found` - No club with this ID
/// - `422 Unprocessable Entity` - Unknown tier letter or negative member count
#[utoipa::path(
    put,
    path = "/club/{id}",
    tag = CLUB_TAG,
    params(
        ("id" = i32, Path, description = "Club ID")
    ),
    request_body = ClubFieldsDto,
    responses(
        (status = 200, description = "Successfully updated club", body = ClubDto),
        (status = 400, description = "Invalid ID or club data", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 422, description = "Invalid club fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ClubFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Club>::new(&state.db);

    let params = ClubFields::from_dto(payload)?;

    match service.update(id, params).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(not_found::<Club>(id)),
    }
}

/// DELETE /club/{id} - Delete a club
///
/// # Returns
/// - `200 OK` - The club as it was before deletion
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No club with this ID, including one already deleted
#[utoipa::path(
    delete,
    path = "/club/{id}",
    tag = CLUB_TAG,
    params(
        ("id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted club", body = ClubDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Club>::new(&state.db);

    match service.delete(id).await? {
        Some(club) => Ok((StatusCode::OK, Json(club.into_dto()))),
        None => Err(not_found::<Club>(id)),
    }
}
