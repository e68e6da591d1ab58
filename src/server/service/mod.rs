//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models, log the outcome of
//! state-changing operations and lift repository errors into `AppError`.

pub mod auth;
pub mod city;
pub mod hotel;
pub mod tag;
