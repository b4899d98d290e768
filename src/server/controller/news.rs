use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        news::{NewsDto, NewsFieldsDto},
    },
    server::{
        controller::not_found,
        error::AppError,
        model::{
            news::{News, NewsFields},
            resource::Resource,
        },
        service::resource::ResourceService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// GET /news - List all news posts
///
/// Ordered by ID, no pagination or filtering.
///
/// # Returns
/// - `200 OK` - JSON array of news posts
/// - `503 Service Unavailable` - Database unreachable
#[utoipa::path(
    get,
    path = "/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved news", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<News>::new(&state.db);

    let news = service.list().await?;

    Ok((
        StatusCode::OK,
        Json(news.into_iter().map(News::into_dto).collect::<Vec<_>>()),
    ))
}

/// GET /news/{id} - Get a news post by ID
///
/// # Returns
/// - `200 OK` - The news post
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No news post with this ID
#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved news post", body = NewsDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<News>::new(&state.db);

    match service.get_by_id(id).await? {
        Some(news) => Ok((StatusCode::OK, Json(news.into_dto()))),
        None => Err(not_found::<News>(id)),
    }
}

/// POST /news - Create a news post
///
/// Absent fields are stored empty and keys outside the schema are ignored.
///
/// # Returns
/// - `201 Created` - The created news post including its store-assigned ID
/// - `400 Bad Request` - Malformed JSON body
/// - `422 Unprocessable Entity` - Invalid date
#[utoipa::path(
    post,
    path = "/news",
    tag = NEWS_TAG,
    request_body = NewsFieldsDto,
    responses(
        (status = 201, description = "Successfully created news post", body = NewsDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 422, description = "Invalid news fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewsFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<News>::new(&state.db);

    let news = service.create(NewsFields::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// PUT /news/{id} - Update the supplied fields of a news post
///
/// Absent fields keep their values and `null` clears a field.
///
/// # Returns
/// - `200 OK` - The news post after the update
/// - `400 Bad Request` - ID is not an integer, or the body fails as it would on create
/// - `404 Not Found` - No news post with this ID
/// - `422 Unprocessable Entity` - Invalid date
#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News post ID")
    ),
    request_body = NewsFieldsDto,
    responses(
        (status = 200, description = "Successfully updated news post", body = NewsDto),
        (status = 400, description = "Invalid ID or request body", body = ErrorDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 422, description = "Invalid news fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<NewsFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<News>::new(&state.db);

    let news = service.update(id, NewsFields::from(payload)).await?;

    match news {
        Some(news) => Ok((StatusCode::OK, Json(news.into_dto()))),
        None => Err(not_found::<News>(id)),
    }
}

/// DELETE /news/{id} - Delete a news post
///
/// # Returns
/// - `200 OK` - The news post as it was before deletion
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No news post with this ID, including one already deleted
#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "News post ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted news post", body = NewsDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::<News>::new(&state.db);

    match service.delete(id).await? {
        Some(news) => Ok((StatusCode::OK, Json(news.into_dto()))),
        None => Err(not_found::<News>(id)),
    }
}
