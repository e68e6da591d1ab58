use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::hotel::{insert_with_tags, HotelRepository},
    error::catalog::CatalogError,
    model::hotel::{CreateHotelParams, Hotel},
};

mod create;
mod get_all;

fn params(name: &str, city: &str, tags: &[&str]) -> CreateHotelParams {
    CreateHotelParams {
        name: name.to_string(),
        description: None,
        city_name: city.to_string(),
        tag_names: tags.iter().map(|t| t.to_string()).collect(),
        manager_id: None,
    }
}
