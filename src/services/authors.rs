//! Author listings.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::author::AuthorRow;
use crate::models::pagination::{ListFilter, PageResult};
use crate::services::listing::{self, Listing};

pub const AUTHORS: Listing = Listing {
    name: "authors",
    columns: "a.id, a.first_name, a.last_name, a.avatar, a.country_of_origin",
    from: "authors AS a",
    joins: &[],
    search_columns: &["a.first_name", "a.last_name", "a.country_of_origin"],
    sort_column: "a.first_name",
    tiebreak: "a.id",
    scope_column: None,
};

pub async fn list(db: &Database, filter: &ListFilter) -> Result<PageResult<AuthorRow>, AppError> {
    listing::fetch_page(db, &AUTHORS, filter, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::SortOrder;

    #[test]
    fn search_spans_both_name_columns() {
        let q = AUTHORS.build(&ListFilter::new(10, 1, "herb", Some(SortOrder::Desc)), None);
        assert!(q.count_sql.contains("a.first_name ILIKE $1 OR a.last_name ILIKE $1"));
        assert!(q.data_sql.contains("ORDER BY a.first_name DESC, a.id"));
    }
}
