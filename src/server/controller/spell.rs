use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        spell::{SpellDto, SpellFieldsDto},
    },
    server::{
        controller::not_found,
        error::AppError,
        model::{
            resource::Resource,
            spell::{Spell, SpellFields},
        },
        service::resource::ResourceService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping spell endpoints in OpenAPI documentation
pub static SPELL_TAG: &str = "spells";

/// GET /spells - List all spells
///
/// Ordered by ID, no pagination or filtering.
///
/// # Returns
/// - `200 OK` - JSON array of spells
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/spells",
    tag = SPELL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved spells", body = Vec<SpellDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_spells(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Spell>::new(&state.db);

    let spells = service.list().await?;

    Ok((
        StatusCode::OK,
        Json(spells.into_iter().map(Spell::into_dto).collect::<Vec<_>>()),
    ))
}

/// GET /spells/{id} - Get a spell by ID
///
/// # Returns
/// - `200 OK` - The spell
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No spell with this ID
#[utoipa::path(
    get,
    path = "/spells/{id}",
    tag = SPELL_TAG,
    params(
        ("id" = i32, Path, description = "Spell ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved spell", body = SpellDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Spell not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spell_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Spell>::new(&state.db);

    match service.get_by_id(id).await? {
        Some(spell) => Ok((StatusCode::OK, Json(spell.into_dto()))),
        None => Err(not_found::<Spell>(id)),
    }
}

/// POST /spells - Create a spell
///
/// Absent fields are stored empty and keys outside the schema are ignored.
///
/// # Returns
/// - `201 Created` - The created spell including its store-assigned ID
/// - `400 Bad Request` - Malformed JSON body or blank name
/// - `422 Unprocessable Entity` - Wrongly typed value
#[utoipa::path(
    post,
    path = "/spells",
    tag = SPELL_TAG,
    request_body = SpellFieldsDto,
    responses(
        (status = 201, description = "Successfully created spell", body = SpellDto),
        (status = 400, description = "Invalid spell data", body = ErrorDto),
        (status = 422, description = "Invalid spell fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_spell(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SpellFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Spell>::new(&state.db);

    let params = SpellFields::from_dto(payload)?;

    let spell = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(spell.into_dto())))
}

/// PUT /spells/{id} - Update the supplied fields of a spell
///
/// Absent fields keep their values and `null` clears a field.
///
/// # Returns
/// - `200 OK` - The spell after the update
/// - `400 Bad Request` - ID is not an integer, or the body fails as it would on create
/// - `404 Not Found` - No spell with this ID
/// - `422 Unprocessable Entity` - Wrongly typed value
#[utoipa::path(
    put,
    path = "/spells/{id}",
    tag = SPELL_TAG,
    params(
        ("id" = i32, Path, description = "Spell ID")
    ),
    request_body = SpellFieldsDto,
    responses(
        (status = 200, description = "Successfully updated spell", body = SpellDto),
        (status = 400, description = "Invalid ID or spell data", body = ErrorDto),
        (status = 404, description = "Spell not found", body = ErrorDto),
        (status = 422, description = "Invalid spell fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_spell(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<SpellFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Spell>::new(&state.db);

    let params = SpellFields::from_dto(payload)?;

    match service.update(id, params).await? {
        Some(spell) => Ok((StatusCode::OK, Json(spell.into_dto()))),
        None => Err(not_found::<Spell>(id)),
    }
}

/// DELETE /spells/{id} - Delete a spell
///
/// # Returns
/// - `200 OK` - The spell as it was before deletion
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No spell with this ID, including one already deleted
#[utoipa::path(
    delete,
    path = "/spells/{id}",
    tag = SPELL_TAG,
    params(
        ("id" = i32, Path, description = "Spell ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted spell", body = SpellDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Spell not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_spell(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Spell>::new(&state.db);

    match service.delete(id).await? {
        Some(spell) => Ok((StatusCode::OK, Json(spell.into_dto()))),
        None => Err(not_found::<Spell>(id)),
    }
}
