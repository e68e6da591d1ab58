use sea_orm::DatabaseConnection;

use crate::server::{
    data::tag::TagRepository,
    error::AppError,
    model::tag::{CreateTagParam, Tag},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag and returns its id
    pub async fn create(&self, param: CreateTagParam) -> Result<i32, AppError> {
        let repo = TagRepository::new(self.db);

        let name = param.name.clone();
        let id = repo.create(param).await?;

        tracing::info!("Created tag '{}' (id {})", name, id);

        Ok(id)
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let repo = TagRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Deletes a tag together with its hotel associations
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TagRepository::new(self.db);

        repo.delete(id).await?;

        tracing::info!("Deleted tag {}", id);

        Ok(())
    }
}
