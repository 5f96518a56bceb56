//! Domain logic shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! closed enumerations stored as strings, pagination rules, and the pure
//! parsing/formatting helpers used by the importer and the CSV export.

pub mod character;
pub mod comment;
pub mod csv;
pub mod error;
pub mod import;
pub mod pagination;
pub mod types;
