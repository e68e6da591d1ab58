//! Request and response DTOs exchanged over the HTTP API.

pub mod api;
pub mod auth;
pub mod city;
pub mod hotel;
pub mod tag;
