//! Publisher listings.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::pagination::{ListFilter, PageResult};
use crate::models::publisher::PublisherRow;
use crate::services::listing::{self, Listing};

pub const PUBLISHERS: Listing = Listing {
    name: "publishers",
    columns: "p.id, p.name, p.email, p.website, p.established_date, p.pic",
    from: "publishers AS p",
    joins: &[],
    search_columns: &["p.name", "p.email", "p.website"],
    sort_column: "p.name",
    tiebreak: "p.id",
    scope_column: None,
};

pub async fn list(db: &Database, filter: &ListFilter) -> Result<PageResult<PublisherRow>, AppError> {
    listing::fetch_page(db, &PUBLISHERS, filter, None).await
}
