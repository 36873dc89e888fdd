//! Filter query builder and the generic listing executor.
//!
//! A [`Listing`] describes one entity's fixed projection: columns, the FROM
//! table with its joins, the columns a free-text search runs against and the
//! default sort column. [`Listing::build`] turns it plus a [`ListFilter`] into
//! a data statement and a count statement sharing the same WHERE clause;
//! [`fetch_page`] runs both and assembles the [`PageResult`].

use sqlx::postgres::PgRow;
use sqlx::FromRow;

use crate::db::Database;
use crate::errors::AppError;
use crate::models::pagination::{ListFilter, PageResult};

/// How a joined table is attached to the listing's FROM table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Rows without a match on the joined side are dropped.
    Inner,
    /// Rows are kept; joined columns come back NULL and must be coalesced.
    Left,
}

impl JoinKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Join {
    pub kind: JoinKind,
    pub table: &'static str,
    pub on: &'static str,
}

impl Join {
    pub const fn left(table: &'static str, on: &'static str) -> Self {
        Self {
            kind: JoinKind::Left,
            table,
            on,
        }
    }

    pub const fn inner(table: &'static str, on: &'static str) -> Self {
        Self {
            kind: JoinKind::Inner,
            table,
            on,
        }
    }
}

/// Static description of one listable projection.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    /// Used in logs and timeout messages only.
    pub name: &'static str,
    pub columns: &'static str,
    pub from: &'static str,
    pub joins: &'static [Join],
    /// Text columns OR-combined by the search predicate.
    pub search_columns: &'static [&'static str],
    /// Column ordered by when the caller asks for a direction.
    pub sort_column: &'static str,
    /// Unique ordering key; the default order and the secondary sort key.
    pub tiebreak: &'static str,
    /// Column compared for equality against a caller-supplied scope value.
    pub scope_column: Option<&'static str>,
}

/// A value bound to a `$n` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
    Int(i32),
    Text(String),
}

/// Data and count statements built from one filter. Placeholders in both
/// statements refer to `binds` in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub data_sql: String,
    pub count_sql: String,
    pub binds: Vec<Bind>,
}

impl Listing {
    fn from_clause(&self) -> String {
        let mut sql = format!("FROM {}", self.from);
        for join in self.joins {
            sql.push_str(&format!(" {} {} ON {}", join.kind.keyword(), join.table, join.on));
        }
        sql
    }

    /// Build the paginated data statement and its matching count statement.
    ///
    /// The scope value is ignored for listings without a scope column.
    pub fn build(&self, filter: &ListFilter, scope: Option<Bind>) -> FilterQuery {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<Bind> = Vec::new();

        if let (Some(column), Some(value)) = (self.scope_column, scope) {
            binds.push(value);
            conditions.push(format!("{column} = ${}", binds.len()));
        }

        if let Some(key) = filter.search() {
            if !self.search_columns.is_empty() {
                binds.push(Bind::Text(like_pattern(key)));
                let param_index = binds.len();
                let matches: Vec<String> = self
                    .search_columns
                    .iter()
                    .map(|column| format!("{column} ILIKE ${param_index}"))
                    .collect();
                conditions.push(format!("({})", matches.join(" OR ")));
            }
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let order_clause = match filter.sort() {
            Some(direction) => format!(
                "ORDER BY {} {}, {}",
                self.sort_column,
                direction.as_sql(),
                self.tiebreak
            ),
            None => format!("ORDER BY {}", self.tiebreak),
        };

        let from_clause = self.from_clause();
        let count_sql = format!("SELECT COUNT(*) {from_clause}{where_clause}");
        let data_sql = format!(
            "SELECT {} {from_clause}{where_clause} {order_clause} LIMIT {} OFFSET {}",
            self.columns,
            filter.limit(),
            filter.offset()
        );

        FilterQuery {
            data_sql,
            count_sql,
            binds,
        }
    }

    /// Unpaged, unfiltered statement over the same projection, ascending by
    /// the sort column.
    pub fn all_sql(&self) -> String {
        format!(
            "SELECT {} {} ORDER BY {} ASC, {}",
            self.columns,
            self.from_clause(),
            self.sort_column,
            self.tiebreak
        )
    }
}

/// Wrap a search key as a literal-substring LIKE pattern.
fn like_pattern(key: &str) -> String {
    let mut pattern = String::with_capacity(key.len() + 2);
    pattern.push('%');
    for ch in key.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Run one listing end to end: count, page of rows, envelope.
///
/// Either statement failing, timing out, or any row failing to scan fails the
/// whole call; no partial page is returned. The two statements do not share a
/// snapshot, so a concurrent write can briefly skew `total` against `items`.
pub async fn fetch_page<T>(
    db: &Database,
    listing: &Listing,
    filter: &ListFilter,
    scope: Option<Bind>,
) -> Result<PageResult<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let query = listing.build(filter, scope);

    let mut count_query = sqlx::query_scalar::<_, i64>(&query.count_sql);
    let mut data_query = sqlx::query_as::<_, T>(&query.data_sql);

    // Bind parameters in the same order for both queries
    macro_rules! bind_both {
        ($val:expr) => {
            count_query = count_query.bind($val);
            data_query = data_query.bind($val);
        };
    }

    for bind in &query.binds {
        match bind {
            Bind::Int(value) => {
                bind_both!(*value);
            }
            Bind::Text(value) => {
                bind_both!(value.clone());
            }
        }
    }

    let total = db
        .bounded(&format!("{}.count", listing.name), count_query.fetch_one(db.pool()))
        .await?;
    let items = db
        .bounded(&format!("{}.data", listing.name), data_query.fetch_all(db.pool()))
        .await?;

    tracing::debug!(
        listing = listing.name,
        page = filter.page(),
        limit = filter.limit(),
        total,
        returned = items.len(),
        "Listing fetched"
    );

    Ok(PageResult::new(items, total, filter))
}

/// Fetch every row of a listing's projection, unpaged.
pub async fn fetch_all<T>(db: &Database, listing: &Listing) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = listing.all_sql();
    db.bounded(
        &format!("{}.all", listing.name),
        sqlx::query_as::<_, T>(&sql).fetch_all(db.pool()),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::SortOrder;

    const BOOKS: Listing = Listing {
        name: "test_books",
        columns: "b.id, b.title, COALESCE(p.name, '') AS publisher_name",
        from: "books AS b",
        joins: &[Join::left("publishers AS p", "p.id = b.publisher_id")],
        search_columns: &["b.title", "p.name"],
        sort_column: "b.title",
        tiebreak: "b.id",
        scope_column: None,
    };

    const BOOKS_BY_GENRE: Listing = Listing {
        name: "test_books_by_genre",
        columns: "b.id, b.title",
        from: "books AS b",
        joins: &[
            Join::inner("book_genres AS bg", "bg.book_id = b.id"),
            Join::inner("genres AS g", "g.id = bg.genre_id"),
        ],
        search_columns: &["b.title"],
        sort_column: "b.title",
        tiebreak: "b.id",
        scope_column: Some("g.title"),
    };

    #[test]
    fn unfiltered_listing() {
        let q = BOOKS.build(&ListFilter::default(), None);
        assert_eq!(
            q.count_sql,
            "SELECT COUNT(*) FROM books AS b LEFT JOIN publishers AS p ON p.id = b.publisher_id"
        );
        assert_eq!(
            q.data_sql,
            "SELECT b.id, b.title, COALESCE(p.name, '') AS publisher_name \
             FROM books AS b LEFT JOIN publishers AS p ON p.id = b.publisher_id \
             ORDER BY b.id LIMIT 10 OFFSET 0"
        );
        assert!(q.binds.is_empty());
    }

    #[test]
    fn search_is_bound_and_shared_by_both_statements() {
        let q = BOOKS.build(&ListFilter::new(10, 1, "Dune", None), None);
        let predicate = " WHERE (b.title ILIKE $1 OR p.name ILIKE $1)";
        assert!(q.count_sql.ends_with(predicate), "{}", q.count_sql);
        assert!(q.data_sql.contains(predicate), "{}", q.data_sql);
        assert!(!q.data_sql.contains("Dune"));
        assert_eq!(q.binds, vec![Bind::Text("%Dune%".to_string())]);
    }

    #[test]
    fn sort_and_window_only_touch_the_data_statement() {
        let q = BOOKS.build(&ListFilter::new(10, 3, "", Some(SortOrder::Desc)), None);
        assert!(q.data_sql.ends_with("ORDER BY b.title DESC, b.id LIMIT 10 OFFSET 20"));
        assert!(!q.count_sql.contains("ORDER BY"));
        assert!(!q.count_sql.contains("LIMIT"));
    }

    #[test]
    fn ascending_sort() {
        let q = BOOKS.build(&ListFilter::new(5, 1, "", Some(SortOrder::Asc)), None);
        assert!(q.data_sql.ends_with("ORDER BY b.title ASC, b.id LIMIT 5 OFFSET 0"));
    }

    #[test]
    fn normalized_window_for_bad_inputs() {
        let q = BOOKS.build(&ListFilter::new(0, -5, "", None), None);
        assert!(q.data_sql.ends_with("LIMIT 10 OFFSET 0"));
    }

    #[test]
    fn scope_binds_before_search() {
        let q = BOOKS_BY_GENRE.build(
            &ListFilter::new(10, 1, "war", None),
            Some(Bind::Text("Science Fiction".to_string())),
        );
        assert!(q.count_sql.contains(
            "INNER JOIN book_genres AS bg ON bg.book_id = b.id \
             INNER JOIN genres AS g ON g.id = bg.genre_id"
        ));
        assert!(q.count_sql.ends_with(" WHERE g.title = $1 AND (b.title ILIKE $2)"));
        assert_eq!(
            q.binds,
            vec![
                Bind::Text("Science Fiction".to_string()),
                Bind::Text("%war%".to_string())
            ]
        );
    }

    #[test]
    fn scope_ignored_without_scope_column() {
        let q = BOOKS.build(&ListFilter::default(), Some(Bind::Int(4)));
        assert!(q.binds.is_empty());
        assert!(!q.count_sql.contains("WHERE"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Dune"), "%Dune%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\x"), "%c:\\\\x%");
    }

    #[test]
    fn injection_shaped_keys_stay_in_binds() {
        let key = "'; DROP TABLE books; --";
        let q = BOOKS.build(&ListFilter::new(10, 1, key, None), None);
        assert!(!q.data_sql.contains("DROP"));
        assert!(!q.count_sql.contains("DROP"));
        assert_eq!(q.binds, vec![Bind::Text(format!("%{key}%"))]);
    }

    #[test]
    fn all_sql_is_unpaged() {
        let sql = BOOKS.all_sql();
        assert!(sql.ends_with("ORDER BY b.title ASC, b.id"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("WHERE"));
    }
}
