//! Hotel factory for creating test hotel entities.
//!
//! Hotels created here bypass the transactional creation path and write the hotel row
//! and its association rows directly, which makes them suitable for seeding state
//! before exercising read paths or uniqueness checks.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hotel = HotelFactory::new(&db, city.id)
///     .name("Ritz")
///     .description(Some("Luxury"))
///     .manager_id(Some(42))
///     .tags(&[wifi.id, pool.id])
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    city_id: i32,
    name: String,
    description: Option<String>,
    manager_id: Option<i64>,
    tag_ids: Vec<i32>,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - description: `None`
    /// - manager_id: `None`
    /// - tags: none
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            city_id,
            name: format!("Hotel {}", id),
            description: None,
            manager_id: None,
            tag_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn manager_id(mut self, manager_id: Option<i64>) -> Self {
        self.manager_id = manager_id;
        self
    }

    /// Sets the tags to associate with the hotel.
    pub fn tags(mut self, tag_ids: &[i32]) -> Self {
        self.tag_ids = tag_ids.to_vec();
        self
    }

    /// Inserts the hotel row followed by one association row per tag.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - Created hotel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        let hotel = entity::hotel::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            city_id: ActiveValue::Set(self.city_id),
            manager_id: ActiveValue::Set(self.manager_id),
        }
        .insert(self.db)
        .await?;

        for tag_id in self.tag_ids {
            entity::hotel_tag::ActiveModel {
                id: ActiveValue::NotSet,
                hotel_id: ActiveValue::Set(hotel.id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(hotel)
    }
}

/// Creates an untagged hotel with default values in the given city.
pub async fn create_hotel(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db, city_id).build().await
}
