use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        auth::{LoginDto, RegisterDto, TokenDto, UpdateUserRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::auth::{LoginParams, RegisterParams, Role},
        service::auth::AuthService,
        state::AppState,
        util::validate::require_name,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Forwards the registration to the auth service and returns the access token it issues.
///
/// # Returns
/// - `200 OK` - User registered, token returned
/// - `400 Bad Request` - Blank username or registration refused by the auth service
/// - `502 Bad Gateway` - Auth service unavailable
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "User registered", body = TokenDto),
        (status = 400, description = "Registration refused", body = ErrorDto),
        (status = 502, description = "Auth service unavailable", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    require_name("username", &payload.username)?;

    let service = AuthService::new(state.auth_client.as_ref());

    let access_token = service.register(RegisterParams::from_dto(payload)).await?;

    Ok(Json(TokenDto { access_token }))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - Credentials accepted, token returned
/// - `400 Bad Request` - Credentials refused
/// - `502 Bad Gateway` - Auth service unavailable
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Credentials refused", body = ErrorDto),
        (status = 502, description = "Auth service unavailable", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(state.auth_client.as_ref());

    let access_token = service.login(LoginParams::from_dto(payload)).await?;

    Ok(Json(TokenDto { access_token }))
}

/// Change the role of a user.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - Role updated
/// - `400 Bad Request` - Blank username or unknown user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `502 Bad Gateway` - Auth service unavailable
#[utoipa::path(
    put,
    path = "/api/admin/users/role",
    tag = AUTH_TAG,
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = StatusDto),
        (status = 400, description = "Role update refused", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 502, description = "Auth service unavailable", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(state.auth_client.as_ref(), &headers)
        .require(&[Permission::Admin])
        .await?;

    require_name("username", &payload.username)?;

    let service = AuthService::new(state.auth_client.as_ref());

    service
        .update_user_role(&admin, &payload.username, Role::from(payload.role))
        .await?;

    Ok(Json(StatusDto::ok()))
}
