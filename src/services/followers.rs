//! Reader → author follow relations.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::pagination::{ListFilter, PageResult};
use crate::models::relation::FollowerRow;
use crate::services::listing::{self, Join, Listing};

pub const FOLLOWERS: Listing = Listing {
    name: "followers",
    columns: "f.user_id, COALESCE(u.username, '') AS username, f.author_id, \
              COALESCE(a.first_name, '') AS author_first_name, \
              COALESCE(a.last_name, '') AS author_last_name, f.followed_at",
    from: "followers AS f",
    joins: &[
        Join::left("users AS u", "u.id = f.user_id"),
        Join::left("authors AS a", "a.id = f.author_id"),
    ],
    search_columns: &["u.username", "a.first_name", "a.last_name"],
    sort_column: "COALESCE(u.username, '')",
    tiebreak: "f.user_id, f.author_id",
    scope_column: None,
};

pub async fn list(db: &Database, filter: &ListFilter) -> Result<PageResult<FollowerRow>, AppError> {
    listing::fetch_page(db, &FOLLOWERS, filter, None).await
}
