//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and an
//! external auth service for identities and roles.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Logging and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations, transactions and row aggregation
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authorization guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, auth client)
//! - **Startup** (`startup`) - Tracing, database, migrations, auth client, shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authorizes the caller, validates input, converts DTOs to params
//! 3. **Service** calls the repository and logs the outcome
//! 4. **Data** queries the database, converts rows to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
