//! Publisher list rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pagination::ListRow;

/// Summary DTO for publisher list views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublisherRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub website: String,
    pub established_date: i32,
    pub pic: String,
}

impl ListRow for PublisherRow {
    const COLLECTION: &'static str = "publishers";
}
