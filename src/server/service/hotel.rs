use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::hotel::{CreateHotelParams, Hotel},
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hotel with its city and tags in a single transaction.
    ///
    /// Rejections (duplicate name, unknown city or tag) are logged at warn level; the
    /// repository already logs successful commits.
    pub async fn create(&self, params: CreateHotelParams) -> Result<i32, AppError> {
        let repo = HotelRepository::new(self.db);

        let name = params.name.clone();
        repo.create(params).await.map_err(|err| {
            tracing::warn!("Hotel '{}' was not created: {}", name, err);
            err.into()
        })
    }

    /// Gets every hotel with its city and tags
    pub async fn get_all(&self) -> Result<Vec<Hotel>, AppError> {
        let repo = HotelRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets the hotels managed by the given auth-service user
    pub async fn get_by_manager(&self, manager_id: i64) -> Result<Vec<Hotel>, AppError> {
        let repo = HotelRepository::new(self.db);

        Ok(repo.get_by_manager(manager_id).await?)
    }
}
