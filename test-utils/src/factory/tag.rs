//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tag {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Tag {}", id),
        }
    }

    /// Sets the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
