use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, EventFieldsDto},
    },
    server::{
        controller::not_found,
        error::AppError,
        model::{
            event::{Event, EventFields},
            resource::Resource,
        },
        service::resource::ResourceService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// GET /event - List all events
///
/// Ordered by ID, no pagination or filtering.
///
/// # Returns
/// - `200 OK` - JSON array of events
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/event",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Event>::new(&state.db);

    let events = service.list().await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(Event::into_dto).collect::<Vec<_>>()),
    ))
}

/// GET /event/{id} - Get an event by ID
///
/// # Returns
/// - `200 OK` - The event
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No event with this ID
#[utoipa::path(
    get,
    path = "/event/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Event>::new(&state.db);

    match service.get_by_id(id).await? {
        Some(event) => Ok((StatusCode::OK, Json(event.into_dto()))),
        None => Err(not_found::<Event>(id)),
    }
}

/// POST /event - Create an event
///
/// Absent fields are stored empty and keys outside the schema are ignored.
///
/// # Returns
/// - `201 Created` - The created event including its store-assigned ID
/// - `400 Bad Request` - Malformed JSON body or blank name
/// - `422 Unprocessable Entity` - Wrongly typed value
#[utoipa::path(
    post,
    path = "/event",
    tag = EVENT_TAG,
    request_body = EventFieldsDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 422, description = "Invalid event fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EventFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Event>::new(&state.db);

    let params = EventFields::from_dto(payload)?;

    let event = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// PUT /event/{id} - Update the supplied fields of an event
///
/// Absent fields keep their values and `null` clears a field.
///
/// # Returns
/// - `200 OK` - The event after the update
/// - `400 Bad Request` - ID is not an integer, or the body fails as it would on create
/// - `404 Not Found` - No event with this ID
/// - `422 Unprocessable Entity` - Wrongly typed value
#[utoipa::path(
    put,
    path = "/event/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = EventFieldsDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid ID or event data", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid event fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<EventFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Event>::new(&state.db);

    let params = EventFields::from_dto(payload)?;

    match service.update(id, params).await? {
        Some(event) => Ok((StatusCode::OK, Json(event.into_dto()))),
        None => Err(not_found::<Event>(id)),
    }
}

/// DELETE /event/{id} - Delete an event
///
/// # Returns
/// - `200 OK` - The event as it was before deletion
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No event with this ID, including one already deleted
#[utoipa::path(
    delete,
    path = "/event/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted event", body = EventDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<Event>::new(&state.db);

    match service.delete(id).await? {
        Some(event) => Ok((StatusCode::OK, Json(event.into_dto()))),
        None => Err(not_found::<Event>(id)),
    }
}
