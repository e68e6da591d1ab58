use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto},
        hotel::{CreateHotelDto, HotelListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::hotel::{CreateHotelParams, Hotel},
        service::hotel::HotelService,
        state::AppState,
        util::validate::{require_name, require_names},
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

fn into_list_dto(hotels: Vec<Hotel>) -> HotelListDto {
    HotelListDto {
        hotels: hotels.into_iter().map(Hotel::into_dto).collect(),
    }
}

/// Create a hotel in an existing city with existing tags.
///
/// The hotel and all of its tag links are written in one transaction; if the city or
/// any tag is missing nothing is stored.
///
/// # Access Control
/// - `Admin` - Only admins can create hotels
///
/// # Returns
/// - `201 Created` - Hotel created, id returned
/// - `400 Bad Request` - Blank name, city or tag; unknown city ("no such city") or tag
///   ("no such tag"); failed insert
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - A hotel with this name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = CreatedDto),
        (status = 400, description = "Invalid hotel data or unknown city/tag", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Hotel already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    require_name("name", &payload.name)?;
    require_name("city", &payload.city)?;
    require_names("tag", &payload.tags)?;

    let service = HotelService::new(&state.db);

    let id = service.create(CreateHotelParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(CreatedDto { id })))
}

/// List all hotels with their city and tags.
///
/// # Returns
/// - `200 OK` - Every hotel, ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "All hotels", body = HotelListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = HotelService::new(&state.db);

    let hotels = service.get_all().await?;

    Ok(Json(into_list_dto(hotels)))
}

/// List the hotels managed by the caller.
///
/// # Access Control
/// - `Manager` - Managers (and admins) see the hotels assigned to them
///
/// # Returns
/// - `200 OK` - Hotels whose manager is the caller
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels/own",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "Hotels managed by the caller", body = HotelListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_own_hotels(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let manager = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Manager])
        .await?;

    let service = HotelService::new(&state.db);

    let hotels = service.get_by_manager(manager.id).await?;

    Ok(Json(into_list_dto(hotels)))
}
