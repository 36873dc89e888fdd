//! Review moderation and reader book-request listings.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::pagination::{ListFilter, PageResult};
use crate::models::review::{RequestedBookRow, ReviewRow};
use crate::services::listing::{self, Join, Listing};

pub const REVIEWS: Listing = Listing {
    name: "reviews",
    columns: "r.id, r.rating, r.body, COALESCE(b.title, '') AS book_title, \
              COALESCE(u.username, '') AS username, r.is_active, r.created_at, r.updated_at",
    from: "reviews AS r",
    joins: &[
        Join::left("users AS u", "u.id = r.user_id"),
        Join::left("books AS b", "b.id = r.book_id"),
    ],
    search_columns: &["b.title", "u.username", "r.body"],
    sort_column: "r.created_at",
    tiebreak: "r.id",
    scope_column: None,
};

pub const REQUESTED_BOOKS: Listing = Listing {
    name: "requested_books",
    columns: "rb.id, rb.book_title, rb.author, rb.requested_by AS user_id, \
              COALESCE(u.username, '') AS username, COALESCE(u.email, '') AS email, \
              rb.requested_date, rb.is_added",
    from: "request_books AS rb",
    joins: &[Join::left("users AS u", "u.id = rb.requested_by")],
    search_columns: &["rb.book_title", "rb.author"],
    sort_column: "rb.book_title",
    tiebreak: "rb.id",
    scope_column: None,
};

pub async fn list_reviews(db: &Database, filter: &ListFilter) -> Result<PageResult<ReviewRow>, AppError> {
    listing::fetch_page(db, &REVIEWS, filter, None).await
}

pub async fn list_requested_books(
    db: &Database,
    filter: &ListFilter,
) -> Result<PageResult<RequestedBookRow>, AppError> {
    listing::fetch_page(db, &REQUESTED_BOOKS, filter, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_books_search_title_or_author() {
        let q = REQUESTED_BOOKS.build(&ListFilter::new(10, 1, "le guin", None), None);
        assert!(q.count_sql.ends_with("WHERE (rb.book_title ILIKE $1 OR rb.author ILIKE $1)"));
        assert!(q.count_sql.contains("LEFT JOIN users AS u ON u.id = rb.requested_by"));
    }
}
