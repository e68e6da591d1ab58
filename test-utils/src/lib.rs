//! Booking API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the booking
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding cities, tags and hotels.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_cities() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_hotel_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let city = factory::city::create_city(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
