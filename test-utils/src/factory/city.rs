//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let paris = CityFactory::new(&db).name("Paris").build().await?;
/// ```
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"City {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("City {}", id),
        }
    }

    /// Sets the city name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the city entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::city::Model)` - Created city entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
///
/// Shorthand for `CityFactory::new(db).build().await`.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}
