//! Repository layer: one stateless struct per table.
//!
//! List queries are assembled with [`sqlx::QueryBuilder`] from the filter
//! objects in [`crate::models`]. Each present filter field contributes one
//! bound predicate; predicates are joined with `AND`.

pub mod appearance_repo;
pub mod character_repo;
pub mod comment_repo;
pub mod episode_repo;
pub mod user_repo;

pub use appearance_repo::AppearanceRepo;
pub use character_repo::CharacterRepo;
pub use comment_repo::CommentRepo;
pub use episode_repo::EpisodeRepo;
pub use user_repo::UserRepo;

use rickmorty_core::pagination::Page;
use sqlx::{QueryBuilder, Sqlite};

/// Tracks whether a `WHERE` has been emitted so later predicates get `AND`.
#[derive(Debug, Default)]
pub(crate) struct Predicates {
    started: bool,
}

impl Predicates {
    /// Push the connective for the next predicate and hand the builder back.
    pub(crate) fn and<'q, 'args>(
        &mut self,
        qb: &'q mut QueryBuilder<'args, Sqlite>,
    ) -> &'q mut QueryBuilder<'args, Sqlite> {
        qb.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
        qb
    }
}

/// Append `ORDER BY <order_by> LIMIT ? OFFSET ?` for a resolved page.
pub(crate) fn push_page(qb: &mut QueryBuilder<'_, Sqlite>, order_by: &str, page: Page) {
    qb.push(" ORDER BY ")
        .push(order_by)
        .push(" LIMIT ")
        .push_bind(page.limit)
        .push(" OFFSET ")
        .push_bind(page.skip);
}

/// Build a `LIKE` pattern matching `value` anywhere in a column.
///
/// `\`, `%` and `_` in the input are escaped; use with `ESCAPE '\'`. Case is
/// left alone: callers fold both sides with SQL `LOWER`.
pub(crate) fn contains_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
