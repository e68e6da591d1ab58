use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, StatusDto},
        tag::{CreateTagDto, TagListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::tag::CreateTagParam,
        service::tag::TagService,
        state::AppState,
        util::validate::require_name,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Create a new tag.
///
/// # Access Control
/// - `Admin` - Only admins can create tags
///
/// # Returns
/// - `201 Created` - Tag created, id returned
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A tag with this name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Tag created", body = CreatedDto),
        (status = 400, description = "Invalid tag name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Tag already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    require_name("name", &payload.name)?;

    let service = TagService::new(&state.db);

    let id = service.create(CreateTagParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List all tags.
///
/// # Returns
/// - `200 OK` - Every tag, ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags", body = TagListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tags = service.get_all().await?;

    Ok(Json(TagListDto {
        tags: tags.into_iter().map(|t| t.into_dto()).collect(),
    }))
}

/// Delete a tag.
///
/// Hotels carrying the tag lose it; the hotels themselves are kept.
///
/// # Access Control
/// - `Admin` - Only admins can delete tags
///
/// # Returns
/// - `200 OK` - Tag deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No tag with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = i32, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag deleted", body = StatusDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = TagService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(StatusDto::ok()))
}
