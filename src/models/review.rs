//! Review and book-request list rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pagination::ListRow;

/// Review summary with the reviewed book and reviewer flattened in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewRow {
    pub id: i32,
    pub rating: f64,
    pub body: String,
    pub book_title: String,
    pub username: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListRow for ReviewRow {
    const COLLECTION: &'static str = "reviews";
}

/// A reader's request for a book missing from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RequestedBookRow {
    pub id: i32,
    pub book_title: String,
    pub author: String,
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub requested_date: DateTime<Utc>,
    pub is_added: bool,
}

impl ListRow for RequestedBookRow {
    const COLLECTION: &'static str = "requested_books";
}
