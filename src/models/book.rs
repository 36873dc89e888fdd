//! Book list rows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pagination::ListRow;

/// Summary row for book listings, with the publisher name flattened in.
///
/// `publisher_name` is empty when the book has no publisher.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    pub isbn: i64,
    pub cover: String,
    pub published_date: NaiveDate,
    pub is_active: bool,
    pub added_at: DateTime<Utc>,
    pub publisher_name: String,
}

impl ListRow for BookRow {
    const COLLECTION: &'static str = "books";
}

/// Minimal book reference used to populate admin select boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookOption {
    pub id: i32,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::{ListFilter, PageResult};

    #[test]
    fn book_page_uses_books_key() {
        let row = BookRow {
            id: 1,
            title: "Dune".to_string(),
            isbn: 9780441013593,
            cover: String::new(),
            published_date: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            is_active: true,
            added_at: Utc::now(),
            publisher_name: "Chilton".to_string(),
        };
        let json = serde_json::to_value(PageResult::new(vec![row], 1, &ListFilter::default())).unwrap();
        assert_eq!(json["books"][0]["title"], "Dune");
        assert_eq!(json["books"][0]["published_date"], "1965-08-01");
        assert_eq!(json["books"][0]["publisher_name"], "Chilton");
    }
}
