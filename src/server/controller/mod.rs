//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, validate and convert DTOs into
//! parameter models, call the service layer and convert the results back into DTOs.
//! Each handler carries a `utoipa::path` annotation that feeds the OpenAPI document.

pub mod auth;
pub mod city;
pub mod hotel;
pub mod tag;
