//! Book listings: the full catalog and the public genre/language shelves.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::book::BookRow;
use crate::models::pagination::{ListFilter, PageResult};
use crate::services::listing::{self, Bind, Join, Listing};

pub(crate) const BOOK_COLUMNS: &str = "b.id, b.title, b.isbn, b.cover, b.published_date, \
     b.is_active, b.added_at, COALESCE(p.name, '') AS publisher_name";

pub(crate) const PUBLISHER_JOIN: Join = Join::left("publishers AS p", "p.id = b.publisher_id");

const BOOK_SEARCH: &[&str] = &["b.title", "CAST(b.isbn AS TEXT)"];

pub const BOOKS: Listing = Listing {
    name: "books",
    columns: BOOK_COLUMNS,
    from: "books AS b",
    joins: &[PUBLISHER_JOIN],
    search_columns: BOOK_SEARCH,
    sort_column: "b.title",
    tiebreak: "b.id",
    scope_column: None,
};

/// Books tagged with one genre, matched by genre title.
pub const BOOKS_BY_GENRE: Listing = Listing {
    name: "books_by_genre",
    columns: BOOK_COLUMNS,
    from: "books AS b",
    joins: &[
        Join::inner("book_genres AS bg", "bg.book_id = b.id"),
        Join::inner("genres AS g", "g.id = bg.genre_id"),
        PUBLISHER_JOIN,
    ],
    search_columns: BOOK_SEARCH,
    sort_column: "b.title",
    tiebreak: "b.id",
    scope_column: Some("g.title"),
};

/// Books available in one language, matched by language name.
pub const BOOKS_BY_LANGUAGE: Listing = Listing {
    name: "books_by_language",
    columns: BOOK_COLUMNS,
    from: "books AS b",
    joins: &[
        Join::inner("book_languages AS bl", "bl.book_id = b.id"),
        Join::inner("languages AS l", "l.id = bl.language_id"),
        PUBLISHER_JOIN,
    ],
    search_columns: BOOK_SEARCH,
    sort_column: "b.title",
    tiebreak: "b.id",
    scope_column: Some("l.language"),
};

pub async fn list(db: &Database, filter: &ListFilter) -> Result<PageResult<BookRow>, AppError> {
    listing::fetch_page(db, &BOOKS, filter, None).await
}

pub async fn list_by_genre(
    db: &Database,
    genre: &str,
    filter: &ListFilter,
) -> Result<PageResult<BookRow>, AppError> {
    let genre = scope_name(genre, "genre")?;
    listing::fetch_page(db, &BOOKS_BY_GENRE, filter, Some(Bind::Text(genre))).await
}

pub async fn list_by_language(
    db: &Database,
    language: &str,
    filter: &ListFilter,
) -> Result<PageResult<BookRow>, AppError> {
    let language = scope_name(language, "language")?;
    listing::fetch_page(db, &BOOKS_BY_LANGUAGE, filter, Some(Bind::Text(language))).await
}

fn scope_name(value: &str, what: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{what} must not be empty")));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::SortOrder;

    #[test]
    fn catalog_keeps_books_without_publisher() {
        let q = BOOKS.build(&ListFilter::default(), None);
        assert!(q.data_sql.contains("LEFT JOIN publishers AS p ON p.id = b.publisher_id"));
        assert!(q.data_sql.contains("COALESCE(p.name, '') AS publisher_name"));
    }

    #[test]
    fn genre_shelf_scopes_then_searches() {
        let q = BOOKS_BY_GENRE.build(
            &ListFilter::new(10, 2, "dune", Some(SortOrder::Asc)),
            Some(Bind::Text("Science Fiction".to_string())),
        );
        assert!(q
            .count_sql
            .ends_with("WHERE g.title = $1 AND (b.title ILIKE $2 OR CAST(b.isbn AS TEXT) ILIKE $2)"));
        assert!(q.data_sql.ends_with("ORDER BY b.title ASC, b.id LIMIT 10 OFFSET 10"));
    }

    #[test]
    fn language_shelf_scope_column() {
        let q = BOOKS_BY_LANGUAGE.build(&ListFilter::default(), Some(Bind::Text("English".to_string())));
        assert!(q.count_sql.ends_with("WHERE l.language = $1"));
        assert!(q.count_sql.contains("INNER JOIN languages AS l ON l.id = bl.language_id"));
    }

    #[test]
    fn blank_scope_is_rejected() {
        assert!(matches!(scope_name("   ", "genre"), Err(AppError::Validation(_))));
        assert_eq!(scope_name(" Fantasy ", "genre").unwrap(), "Fantasy");
    }
}
