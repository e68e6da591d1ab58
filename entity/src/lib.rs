//! SeaORM entities for the hotel catalog.

pub mod prelude;

pub mod city;
pub mod hotel;
pub mod hotel_tag;
pub mod tag;
