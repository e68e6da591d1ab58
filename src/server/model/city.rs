//! Domain model for cities.

use crate::model::city::{CityDto, CreateCityDto};

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
}

impl City {
    /// Converts an entity model to the domain model at the data layer boundary.
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new city.
#[derive(Debug, Clone)]
pub struct CreateCityParam {
    pub name: String,
}

impl CreateCityParam {
    pub fn from_dto(dto: CreateCityDto) -> Self {
        Self { name: dto.name }
    }
}
