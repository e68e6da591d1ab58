//! Database repository layer for the hotel catalog.
//!
//! Repositories borrow the shared `DatabaseConnection`, use SeaORM entity models
//! internally and return domain models, keeping storage details out of the service layer.
//! Name lookups are free functions generic over `ConnectionTrait` so the same query can
//! run on the pool or inside an open transaction.

pub mod city;
pub mod hotel;
pub mod tag;

#[cfg(test)]
mod test;
