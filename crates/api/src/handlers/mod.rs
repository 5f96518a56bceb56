pub mod auth;
pub mod character;
pub mod comment;
pub mod episode;
pub mod user;
