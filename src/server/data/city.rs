//! City data repository for database operations.
//!
//! This module provides the `CityRepository` for creating, listing and deleting city
//! records, plus the name lookup used by hotel creation to validate a city reference.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::catalog::CatalogError,
    model::city::{City, CreateCityParam},
};

const ENTITY: &str = "city";

/// Looks up the id of the city with exactly the given name.
///
/// Generic over the connection so it can run on the pool or inside a transaction.
///
/// # Returns
/// - `Ok(Some(id))` - City exists
/// - `Ok(None)` - No city with that name
/// - `Err(DbErr)` - Database error during query
pub async fn find_id_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<i32>, DbErr> {
    entity::prelude::City::find()
        .select_only()
        .column(entity::city::Column::Id)
        .filter(entity::city::Column::Name.eq(name))
        .into_tuple::<i32>()
        .one(conn)
        .await
}

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new city and returns its id.
    ///
    /// # Returns
    /// - `Ok(id)` - The generated id of the new city
    /// - `Err(CatalogError::AlreadyExists)` - A city with this name already exists
    /// - `Err(CatalogError::InsertionFailed)` - Insert failed for another reason
    /// - `Err(CatalogError::Internal)` - Database error during the existence check
    pub async fn create(&self, param: CreateCityParam) -> Result<i32, CatalogError> {
        if find_id_by_name(self.db, &param.name).await?.is_some() {
            return Err(CatalogError::AlreadyExists {
                entity: ENTITY,
                name: param.name,
            });
        }

        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| CatalogError::from_insert(ENTITY, &param.name, e))?;

        Ok(city.id)
    }

    /// Gets all cities ordered by id.
    pub async fn get_all(&self) -> Result<Vec<City>, DbErr> {
        let entities = entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(City::from_entity).collect())
    }

    /// Deletes a city by id.
    ///
    /// # Returns
    /// - `Ok(())` - City deleted
    /// - `Err(CatalogError::NotFound)` - No city with that id
    /// - `Err(CatalogError::InUse)` - A hotel still references the city
    pub async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        let hotel_count = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::CityId.eq(id))
            .count(self.db)
            .await?;

        if hotel_count > 0 {
            return Err(CatalogError::InUse { entity: ENTITY, id });
        }

        // A hotel inserted after the count still trips the foreign key.
        let result = entity::prelude::City::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(|e| CatalogError::from_delete(ENTITY, id, e))?;

        if result.rows_affected == 0 {
            return Err(CatalogError::NotFound { entity: ENTITY, id });
        }

        Ok(())
    }
}
