//! Domain model for tags.

use crate::model::tag::{CreateTagDto, TagDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl Tag {
    /// Converts an entity model to the domain model at the data layer boundary.
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new tag.
#[derive(Debug, Clone)]
pub struct CreateTagParam {
    pub name: String,
}

impl CreateTagParam {
    pub fn from_dto(dto: CreateTagDto) -> Self {
        Self { name: dto.name }
    }
}
