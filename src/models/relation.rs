//! Flat rows for many-to-many associations.
//!
//! Each row carries both foreign keys straight from the association table
//! plus display fields from the two joined entities, instead of nesting the
//! full records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pagination::ListRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookAuthorRow {
    pub book_id: i32,
    pub book_title: String,
    pub author_id: i32,
    pub author_first_name: String,
    pub author_last_name: String,
}

impl ListRow for BookAuthorRow {
    const COLLECTION: &'static str = "book_authors";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookGenreRow {
    pub book_id: i32,
    pub book_title: String,
    pub genre_id: i32,
    pub genre_title: String,
}

impl ListRow for BookGenreRow {
    const COLLECTION: &'static str = "book_genres";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookLanguageRow {
    pub book_id: i32,
    pub book_title: String,
    pub language_id: i32,
    pub language: String,
}

impl ListRow for BookLanguageRow {
    const COLLECTION: &'static str = "book_languages";
}

/// A reader following an author.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FollowerRow {
    pub user_id: i32,
    pub username: String,
    pub author_id: i32,
    pub author_first_name: String,
    pub author_last_name: String,
    pub followed_at: DateTime<Utc>,
}

impl ListRow for FollowerRow {
    const COLLECTION: &'static str = "followers";
}

/// A book on a reader's buy list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BuyListRow {
    pub user_id: i32,
    pub username: String,
    pub book_id: i32,
    pub book_title: String,
    pub created_at: DateTime<Utc>,
}

impl ListRow for BuyListRow {
    const COLLECTION: &'static str = "buy_lists";
}

/// A book on a reader's read list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReadListRow {
    pub user_id: i32,
    pub username: String,
    pub book_id: i32,
    pub book_title: String,
    pub created_at: DateTime<Utc>,
}

impl ListRow for ReadListRow {
    const COLLECTION: &'static str = "read_lists";
}
