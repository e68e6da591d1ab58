use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request did not carry a bearer token.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The auth service did not accept the token.
    #[error("Bearer token was rejected by the auth service")]
    InvalidToken,

    /// User is authenticated but lacks the role required for the operation.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i64, String),

    /// The auth service refused a registration, login or role update.
    #[error("Auth service rejected the request: {0}")]
    Rejected(String),

    /// The auth service responded with a server error or an unreadable body.
    #[error("Auth service failure: {0}")]
    ServiceUnavailable(String),

    /// Transport error while calling the auth service.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Rejected`
/// - 401 Unauthorized - For `MissingToken` and `InvalidToken`
/// - 403 Forbidden - For `AccessDenied`
/// - 502 Bad Gateway - For auth service and transport failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(..) => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::Rejected(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::ServiceUnavailable(_) | Self::ReqwestErr(_) => {
                tracing::error!("{}", self);
                error_response(StatusCode::BAD_GATEWAY, "Auth service unavailable")
            }
        }
    }
}
