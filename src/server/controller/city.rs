use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, StatusDto},
        city::{CityListDto, CreateCityDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::city::CreateCityParam,
        service::city::CityService,
        state::AppState,
        util::validate::require_name,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Create a new city.
///
/// # Access Control
/// - `Admin` - Only admins can create cities
///
/// # Returns
/// - `201 Created` - City created, id returned
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A city with this name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = CreatedDto),
        (status = 400, description = "Invalid city name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "City already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    require_name("name", &payload.name)?;

    let service = CityService::new(&state.db);

    let id = service.create(CreateCityParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List all cities.
///
/// # Returns
/// - `200 OK` - Every city, ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = CityListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let cities = service.get_all().await?;

    Ok(Json(CityListDto {
        cities: cities.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

/// Delete a city.
///
/// # Access Control
/// - `Admin` - Only admins can delete cities
///
/// # Returns
/// - `200 OK` - City deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No city with this id
/// - `409 Conflict` - Hotels still belong to the city
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City deleted", body = StatusDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 409, description = "City still has hotels", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = CityService::new(&state.db);

    service.delete(id).await?;

    Ok(Json(StatusDto::ok()))
}
