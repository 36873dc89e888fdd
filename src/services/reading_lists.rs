//! Buy lists and read lists: the admin association listings and a single
//! reader's shelves.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::book::BookRow;
use crate::models::pagination::{ListFilter, PageResult};
use crate::models::relation::{BuyListRow, ReadListRow};
use crate::services::books::{BOOK_COLUMNS, PUBLISHER_JOIN};
use crate::services::listing::{self, Bind, Join, Listing};

pub const BUY_LISTS: Listing = Listing {
    name: "buy_lists",
    columns: "bl.user_id, COALESCE(u.username, '') AS username, bl.book_id, \
              COALESCE(b.title, '') AS book_title, bl.created_at",
    from: "buy_lists AS bl",
    joins: &[
        Join::left("users AS u", "u.id = bl.user_id"),
        Join::left("books AS b", "b.id = bl.book_id"),
    ],
    search_columns: &["u.username", "b.title"],
    sort_column: "COALESCE(u.username, '')",
    tiebreak: "bl.user_id, bl.book_id",
    scope_column: None,
};

pub const READ_LISTS: Listing = Listing {
    name: "read_lists",
    columns: "rl.user_id, COALESCE(u.username, '') AS username, rl.book_id, \
              COALESCE(b.title, '') AS book_title, rl.created_at",
    from: "read_lists AS rl",
    joins: &[
        Join::left("users AS u", "u.id = rl.user_id"),
        Join::left("books AS b", "b.id = rl.book_id"),
    ],
    search_columns: &["u.username", "b.title"],
    sort_column: "COALESCE(u.username, '')",
    tiebreak: "rl.user_id, rl.book_id",
    scope_column: None,
};

/// Books one reader has put on their buy list.
pub const READER_BUY_LIST: Listing = Listing {
    name: "reader_buy_list",
    columns: BOOK_COLUMNS,
    from: "books AS b",
    joins: &[
        Join::inner("buy_lists AS bl", "bl.book_id = b.id"),
        PUBLISHER_JOIN,
    ],
    search_columns: &["b.title"],
    sort_column: "b.title",
    tiebreak: "b.id",
    scope_column: Some("bl.user_id"),
};

/// Books one reader has put on their read list.
pub const READER_READ_LIST: Listing = Listing {
    name: "reader_read_list",
    columns: BOOK_COLUMNS,
    from: "books AS b",
    joins: &[
        Join::inner("read_lists AS rl", "rl.book_id = b.id"),
        PUBLISHER_JOIN,
    ],
    search_columns: &["b.title"],
    sort_column: "b.title",
    tiebreak: "b.id",
    scope_column: Some("rl.user_id"),
};

pub async fn list_buy_lists(
    db: &Database,
    filter: &ListFilter,
) -> Result<PageResult<BuyListRow>, AppError> {
    listing::fetch_page(db, &BUY_LISTS, filter, None).await
}

pub async fn list_read_lists(
    db: &Database,
    filter: &ListFilter,
) -> Result<PageResult<ReadListRow>, AppError> {
    listing::fetch_page(db, &READ_LISTS, filter, None).await
}

pub async fn reader_buy_list(
    db: &Database,
    user_id: i32,
    filter: &ListFilter,
) -> Result<PageResult<BookRow>, AppError> {
    listing::fetch_page(db, &READER_BUY_LIST, filter, Some(Bind::Int(user_id))).await
}

pub async fn reader_read_list(
    db: &Database,
    user_id: i32,
    filter: &ListFilter,
) -> Result<PageResult<BookRow>, AppError> {
    listing::fetch_page(db, &READER_READ_LIST, filter, Some(Bind::Int(user_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::SortOrder;

    #[test]
    fn admin_lists_keep_rows_with_missing_sides() {
        for def in [BUY_LISTS, READ_LISTS] {
            let q = def.build(&ListFilter::default(), None);
            assert_eq!(q.data_sql.matches("LEFT JOIN").count(), 2, "{}", def.name);
            assert!(!q.data_sql.contains("INNER JOIN"));
        }
    }

    #[test]
    fn admin_lists_sort_by_displayed_username() {
        let filter = ListFilter::new(10, 1, "", Some(SortOrder::Desc));
        let q = BUY_LISTS.build(&filter, None);
        assert!(q.data_sql.contains("ORDER BY COALESCE(u.username, '') DESC, bl.user_id, bl.book_id"));
        let q = READ_LISTS.build(&filter, None);
        assert!(q.data_sql.contains("ORDER BY COALESCE(u.username, '') DESC, rl.user_id, rl.book_id"));
    }

    #[test]
    fn reader_shelf_is_scoped_by_user_id() {
        let q = READER_READ_LIST.build(&ListFilter::new(10, 1, "dune", None), Some(Bind::Int(7)));
        assert!(q.count_sql.ends_with("WHERE rl.user_id = $1 AND (b.title ILIKE $2)"));
        assert_eq!(q.binds[0], Bind::Int(7));
    }
}
