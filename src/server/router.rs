use std::time::Duration;

use axum::{http::StatusCode, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        ComponentsBuilder,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, city, hotel, tag},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Booking API", description = "Hotel catalog with cities and tags"),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Registration, login and roles"),
        (name = "city", description = "Cities hotels belong to"),
        (name = "tag", description = "Tags attached to hotels"),
        (name = "hotel", description = "Hotels with their city and tags")
    )
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by guarded endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(|| ComponentsBuilder::new().build());

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// API routes together with their OpenAPI description.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::update_user_role))
        .routes(routes!(city::create_city, city::get_cities))
        .routes(routes!(city::delete_city))
        .routes(routes!(tag::create_tag, tag::get_tags))
        .routes(routes!(tag::delete_tag))
        .routes(routes!(hotel::create_hotel, hotel::get_hotels))
        .routes(routes!(hotel::get_own_hotels))
}

/// Builds the application router with Swagger UI at `/api/docs`.
///
/// Requests are traced, time out after `request_timeout` with 408 and accept any
/// origin.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let (router, api) = api_router().with_state(state).split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
