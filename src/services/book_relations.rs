//! Book ↔ author, genre and language associations projected into flat rows.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::pagination::{ListFilter, PageResult};
use crate::models::relation::{BookAuthorRow, BookGenreRow, BookLanguageRow};
use crate::services::listing::{self, Join, Listing};

/// Left-joined: an association whose book or author vanished still lists,
/// with blank display fields.
pub const BOOK_AUTHORS: Listing = Listing {
    name: "book_authors",
    columns: "ba.book_id, COALESCE(b.title, '') AS book_title, ba.author_id, \
              COALESCE(a.first_name, '') AS author_first_name, \
              COALESCE(a.last_name, '') AS author_last_name",
    from: "book_authors AS ba",
    joins: &[
        Join::left("books AS b", "b.id = ba.book_id"),
        Join::left("authors AS a", "a.id = ba.author_id"),
    ],
    search_columns: &["b.title", "a.first_name", "a.last_name"],
    sort_column: "COALESCE(b.title, '')",
    tiebreak: "ba.book_id, ba.author_id",
    scope_column: None,
};

/// Inner-joined: orphaned associations are dropped.
pub const BOOK_GENRES: Listing = Listing {
    name: "book_genres",
    columns: "bg.book_id, b.title AS book_title, bg.genre_id, g.title AS genre_title",
    from: "book_genres AS bg",
    joins: &[
        Join::inner("books AS b", "b.id = bg.book_id"),
        Join::inner("genres AS g", "g.id = bg.genre_id"),
    ],
    search_columns: &["b.title", "g.title"],
    sort_column: "b.title",
    tiebreak: "bg.book_id, bg.genre_id",
    scope_column: None,
};

/// Inner-joined: orphaned associations are dropped.
pub const BOOK_LANGUAGES: Listing = Listing {
    name: "book_languages",
    columns: "bl.book_id, b.title AS book_title, bl.language_id, l.language",
    from: "book_languages AS bl",
    joins: &[
        Join::inner("books AS b", "b.id = bl.book_id"),
        Join::inner("languages AS l", "l.id = bl.language_id"),
    ],
    search_columns: &["b.title", "l.language"],
    sort_column: "b.title",
    tiebreak: "bl.book_id, bl.language_id",
    scope_column: None,
};

pub async fn list_book_authors(
    db: &Database,
    filter: &ListFilter,
) -> Result<PageResult<BookAuthorRow>, AppError> {
    listing::fetch_page(db, &BOOK_AUTHORS, filter, None).await
}

pub async fn list_book_genres(
    db: &Database,
    filter: &ListFilter,
) -> Result<PageResult<BookGenreRow>, AppError> {
    listing::fetch_page(db, &BOOK_GENRES, filter, None).await
}

pub async fn list_book_languages(
    db: &Database,
    filter: &ListFilter,
) -> Result<PageResult<BookLanguageRow>, AppError> {
    listing::fetch_page(db, &BOOK_LANGUAGES, filter, None).await
}
