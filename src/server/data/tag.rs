//! Tag data repository for database operations.
//!
//! This module provides the `TagRepository` for creating, listing and deleting tag
//! records, plus the name lookup used by hotel creation to validate each tag reference.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::catalog::CatalogError,
    model::tag::{CreateTagParam, Tag},
};

const ENTITY: &str = "tag";

/// Looks up the id of the tag with exactly the given name.
///
/// Generic over the connection so it can run on the pool or inside a transaction.
pub async fn find_id_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<i32>, DbErr> {
    entity::prelude::Tag::find()
        .select_only()
        .column(entity::tag::Column::Id)
        .filter(entity::tag::Column::Name.eq(name))
        .into_tuple::<i32>()
        .one(conn)
        .await
}

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tag and returns its id.
    ///
    /// # Returns
    /// - `Ok(id)` - The generated id of the new tag
    /// - `Err(CatalogError::AlreadyExists)` - A tag with this name already exists
    /// - `Err(CatalogError::InsertionFailed)` - Insert failed for another reason
    pub async fn create(&self, param: CreateTagParam) -> Result<i32, CatalogError> {
        if find_id_by_name(self.db, &param.name).await?.is_some() {
            return Err(CatalogError::AlreadyExists {
                entity: ENTITY,
                name: param.name,
            });
        }

        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| CatalogError::from_insert(ENTITY, &param.name, e))?;

        Ok(tag.id)
    }

    /// Gets all tags ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Deletes a tag by id. Association rows referencing it are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Tag deleted
    /// - `Err(CatalogError::NotFound)` - No tag with that id
    pub async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        let result = entity::prelude::Tag::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(|e| CatalogError::from_delete(ENTITY, id, e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound { entity: ENTITY, id });
        }

        Ok(())
    }
}
