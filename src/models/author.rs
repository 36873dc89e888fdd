//! Author list rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pagination::ListRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthorRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub country_of_origin: String,
}

impl ListRow for AuthorRow {
    const COLLECTION: &'static str = "authors";
}

/// Minimal author reference used to populate admin select boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AuthorOption {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}
