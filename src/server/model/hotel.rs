//! Domain models for hotels.
//!
//! A `Hotel` is the nested form of a hotel: its own columns plus the name of its city
//! and the names of its tags. It is produced by folding flat join rows, never read
//! directly from a single table.

use crate::model::hotel::{CreateHotelDto, HotelDto};

/// A hotel with its resolved city and tag names.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    /// Tag names in the order the join produced them.
    pub tags: Vec<String>,
}

impl Hotel {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            description: self.description,
            city: self.city,
            tags: self.tags,
        }
    }
}

/// Parameters for creating a hotel.
///
/// The city and tags are referenced by name and must already exist. Tag names are
/// processed in the given order; duplicates are not removed.
#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub name: String,
    pub description: Option<String>,
    pub city_name: String,
    pub tag_names: Vec<String>,
    pub manager_id: Option<i64>,
}

impl CreateHotelParams {
    pub fn from_dto(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            city_name: dto.city,
            tag_names: dto.tags,
            manager_id: dto.manager_id,
        }
    }
}
