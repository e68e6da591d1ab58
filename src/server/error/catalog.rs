//! Failure taxonomy for city, tag and hotel operations.
//!
//! Every catalog operation reports its failures as a `CatalogError` so callers can
//! distinguish a duplicate name from a missing reference or a storage fault without
//! inspecting strings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A row with the same unique name already exists.
    #[error("{entity} named '{name}' already exists")]
    AlreadyExists {
        /// Kind of row ("city", "tag", "hotel")
        entity: &'static str,
        name: String,
    },

    /// The city referenced by name does not exist.
    #[error("City '{0}' does not exist")]
    CityNotFound(String),

    /// A tag referenced by name does not exist.
    #[error("Tag '{0}' does not exist")]
    TagNotFound(String),

    /// No row exists with the given id.
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: &'static str, id: i32 },

    /// The row is still referenced by another row and cannot be deleted.
    #[error("{entity} with id {id} is still referenced")]
    InUse { entity: &'static str, id: i32 },

    /// A write failed for a reason not otherwise classified.
    #[error("Failed to insert {entity}: {source}")]
    InsertionFailed {
        entity: &'static str,
        #[source]
        source: DbErr,
    },

    /// Connection, transport or driver failure.
    #[error(transparent)]
    Internal(#[from] DbErr),
}

impl CatalogError {
    /// Classifies a failed insert, treating a unique-constraint violation as a duplicate.
    ///
    /// Concurrent writers can both pass a pre-check for the same name; the storage
    /// constraint rejects the loser and that rejection is reported as `AlreadyExists`.
    pub fn from_insert(entity: &'static str, name: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::AlreadyExists {
                entity,
                name: name.to_string(),
            },
            _ => Self::InsertionFailed {
                entity,
                source: err,
            },
        }
    }

    /// Classifies a failed delete, treating a foreign-key violation as `InUse`.
    pub fn from_delete(entity: &'static str, id: i32, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::InUse { entity, id },
            _ => Self::Internal(err),
        }
    }
}

/// Converts catalog errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `CityNotFound`, `TagNotFound` and `InsertionFailed`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `AlreadyExists` and `InUse`
/// - 500 Internal Server Error - For `Internal`
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyExists { entity, .. } => {
                tracing::debug!("{}", self);
                error_response(
                    StatusCode::CONFLICT,
                    format!("{} with this name already exists", entity),
                )
            }
            Self::CityNotFound(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::BAD_REQUEST, "no such city")
            }
            Self::TagNotFound(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::BAD_REQUEST, "no such tag")
            }
            Self::NotFound { entity, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("{} not found", entity))
            }
            Self::InUse { entity, .. } => error_response(
                StatusCode::CONFLICT,
                format!("{} is still in use", entity),
            ),
            Self::InsertionFailed { .. } => {
                tracing::warn!("{}", self);
                error_response(StatusCode::BAD_REQUEST, "insertion error")
            }
            Self::Internal(err) => {
                tracing::error!("Catalog storage error: {}", err);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
