//! Row structs, DTOs and filter objects, one module per table.

pub mod appearance;
pub mod character;
pub mod comment;
pub mod episode;
pub mod user;
