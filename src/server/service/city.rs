use sea_orm::DatabaseConnection;

use crate::server::{
    data::city::CityRepository,
    error::AppError,
    model::city::{City, CreateCityParam},
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a city and returns its id
    pub async fn create(&self, param: CreateCityParam) -> Result<i32, AppError> {
        let repo = CityRepository::new(self.db);

        let name = param.name.clone();
        let id = repo.create(param).await?;

        tracing::info!("Created city '{}' (id {})", name, id);

        Ok(id)
    }

    pub async fn get_all(&self) -> Result<Vec<City>, AppError> {
        let repo = CityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes a city; fails while hotels still reference it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CityRepository::new(self.db);

        repo.delete(id).await?;

        tracing::info!("Deleted city {}", id);

        Ok(())
    }
}
