/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;
