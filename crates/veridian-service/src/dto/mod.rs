//! Data Transfer Objects (DTOs).

mod account_dto;

pub use account_dto::*;
