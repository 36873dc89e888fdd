//! Unpaged catalog lookups and the admin overview pages built from them.
//!
//! Each overview needs an association listing plus the two lookup lists that
//! feed its select boxes. The three fetches run concurrently; the first error
//! aborts the rest and no partial overview is returned.

use std::future::Future;

use serde::Serialize;

use crate::db::Database;
use crate::errors::AppError;
use crate::models::author::AuthorOption;
use crate::models::book::BookOption;
use crate::models::relation::{BookAuthorRow, BookGenreRow, BookLanguageRow};
use crate::models::taxonomy::{GenreOption, LanguageOption};
use crate::services::book_relations::{BOOK_AUTHORS, BOOK_GENRES, BOOK_LANGUAGES};
use crate::services::listing::{self, Listing};

const BOOK_OPTIONS: Listing = Listing {
    name: "book_options",
    columns: "b.id, b.title",
    from: "books AS b",
    joins: &[],
    search_columns: &[],
    sort_column: "b.title",
    tiebreak: "b.id",
    scope_column: None,
};

const AUTHOR_OPTIONS: Listing = Listing {
    name: "author_options",
    columns: "a.id, a.first_name, a.last_name",
    from: "authors AS a",
    joins: &[],
    search_columns: &[],
    sort_column: "a.first_name",
    tiebreak: "a.id",
    scope_column: None,
};

const GENRE_OPTIONS: Listing = Listing {
    name: "genre_options",
    columns: "g.id, g.title",
    from: "genres AS g",
    joins: &[],
    search_columns: &[],
    sort_column: "g.title",
    tiebreak: "g.id",
    scope_column: None,
};

const LANGUAGE_OPTIONS: Listing = Listing {
    name: "language_options",
    columns: "l.id, l.language",
    from: "languages AS l",
    joins: &[],
    search_columns: &[],
    sort_column: "l.language",
    tiebreak: "l.id",
    scope_column: None,
};

/// Source of the unpaged lookup lists.
pub trait CatalogSource: Sync {
    fn all_books(&self) -> impl Future<Output = Result<Vec<BookOption>, AppError>> + Send;
    fn all_authors(&self) -> impl Future<Output = Result<Vec<AuthorOption>, AppError>> + Send;
    fn all_genres(&self) -> impl Future<Output = Result<Vec<GenreOption>, AppError>> + Send;
    fn all_languages(&self) -> impl Future<Output = Result<Vec<LanguageOption>, AppError>> + Send;
    fn all_book_authors(&self) -> impl Future<Output = Result<Vec<BookAuthorRow>, AppError>> + Send;
    fn all_book_genres(&self) -> impl Future<Output = Result<Vec<BookGenreRow>, AppError>> + Send;
    fn all_book_languages(
        &self,
    ) -> impl Future<Output = Result<Vec<BookLanguageRow>, AppError>> + Send;
}

impl CatalogSource for Database {
    async fn all_books(&self) -> Result<Vec<BookOption>, AppError> {
        listing::fetch_all(self, &BOOK_OPTIONS).await
    }

    async fn all_authors(&self) -> Result<Vec<AuthorOption>, AppError> {
        listing::fetch_all(self, &AUTHOR_OPTIONS).await
    }

    async fn all_genres(&self) -> Result<Vec<GenreOption>, AppError> {
        listing::fetch_all(self, &GENRE_OPTIONS).await
    }

    async fn all_languages(&self) -> Result<Vec<LanguageOption>, AppError> {
        listing::fetch_all(self, &LANGUAGE_OPTIONS).await
    }

    async fn all_book_authors(&self) -> Result<Vec<BookAuthorRow>, AppError> {
        listing::fetch_all(self, &BOOK_AUTHORS).await
    }

    async fn all_book_genres(&self) -> Result<Vec<BookGenreRow>, AppError> {
        listing::fetch_all(self, &BOOK_GENRES).await
    }

    async fn all_book_languages(&self) -> Result<Vec<BookLanguageRow>, AppError> {
        listing::fetch_all(self, &BOOK_LANGUAGES).await
    }
}

#[derive(Debug, Serialize)]
pub struct BookAuthorOverview {
    pub book_authors: Vec<BookAuthorRow>,
    pub books: Vec<BookOption>,
    pub authors: Vec<AuthorOption>,
}

#[derive(Debug, Serialize)]
pub struct BookGenreOverview {
    pub book_genres: Vec<BookGenreRow>,
    pub books: Vec<BookOption>,
    pub genres: Vec<GenreOption>,
}

#[derive(Debug, Serialize)]
pub struct BookLanguageOverview {
    pub book_languages: Vec<BookLanguageRow>,
    pub books: Vec<BookOption>,
    pub languages: Vec<LanguageOption>,
}

pub async fn book_author_overview<S: CatalogSource>(source: &S) -> Result<BookAuthorOverview, AppError> {
    let (book_authors, books, authors) = tokio::try_join!(
        source.all_book_authors(),
        source.all_books(),
        source.all_authors(),
    )?;

    Ok(BookAuthorOverview {
        book_authors,
        books,
        authors,
    })
}

pub async fn book_genre_overview<S: CatalogSource>(source: &S) -> Result<BookGenreOverview, AppError> {
    let (book_genres, books, genres) = tokio::try_join!(
        source.all_book_genres(),
        source.all_books(),
        source.all_genres(),
    )?;

    Ok(BookGenreOverview {
        book_genres,
        books,
        genres,
    })
}

pub async fn book_language_overview<S: CatalogSource>(
    source: &S,
) -> Result<BookLanguageOverview, AppError> {
    let (book_languages, books, languages) = tokio::try_join!(
        source.all_book_languages(),
        source.all_books(),
        source.all_languages(),
    )?;

    Ok(BookLanguageOverview {
        book_languages,
        books,
        languages,
    })
}
