//! Request extractors that guard handlers.
//!
//! - [`auth::AuthUser`] -- Resolves the bearer token to a stored user.

pub mod auth;
