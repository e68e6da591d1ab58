//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let city = factory::city::create_city(&db).await?;
//! let wifi = factory::tag::TagFactory::new(&db).name("Wifi").build().await?;
//! let hotel = factory::hotel::HotelFactory::new(&db, city.id)
//!     .name("Ritz")
//!     .tags(&[wifi.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `city` - Create city entities
//! - `tag` - Create tag entities
//! - `hotel` - Create hotel entities together with their tag associations
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod city;
pub mod helpers;
pub mod hotel;
pub mod tag;

pub use city::create_city;
pub use hotel::create_hotel;
pub use tag::create_tag;
