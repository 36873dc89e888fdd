//! Pagination and filtering primitives shared across all list endpoints.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Compute the last page number for a listing.
///
/// A non-positive `limit` cannot be paged meaningfully and yields a single
/// page. An empty listing still has one (empty) page.
pub fn calculate_last_page(limit: i64, total: i64) -> i64 {
    if limit <= 0 {
        return 1;
    }
    let total = total.max(0);
    ((total + limit - 1) / limit).max(1)
}

/// Sort direction accepted from callers.
///
/// Only these two tokens ever reach SQL; anything else is dropped while
/// parsing, so the direction keyword is always whitelisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction token case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw listing query parameters as they arrive on the query string.
///
/// Every field stays a string so malformed numbers can fall back to their
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Normalize into a filter with no ordering unless one was requested.
    pub fn to_filter(&self) -> ListFilter {
        ListFilter::new(
            parse_or(self.limit.as_deref(), ListFilter::DEFAULT_LIMIT),
            parse_or(self.page.as_deref(), 1),
            self.search.clone().unwrap_or_default(),
            self.sort.as_deref().and_then(SortOrder::parse),
        )
    }

    /// Normalize, using `default_sort` when no valid direction was supplied.
    pub fn to_filter_or(&self, default_sort: SortOrder) -> ListFilter {
        let mut filter = self.to_filter();
        filter.sort = filter.sort.or(Some(default_sort));
        filter
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Normalized listing filter. Construction enforces `limit >= 1` and
/// `page >= 1`, so the derived offset is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    limit: i64,
    page: i64,
    search: String,
    sort: Option<SortOrder>,
}

impl ListFilter {
    /// Items per page when the caller gives none, or a non-positive one.
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn new(limit: i64, page: i64, search: impl Into<String>, sort: Option<SortOrder>) -> Self {
        let limit = if limit <= 0 { Self::DEFAULT_LIMIT } else { limit };
        Self {
            limit,
            page: page.max(1),
            search: search.into().trim().to_string(),
            sort,
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Search key, or `None` when no text filtering applies.
    pub fn search(&self) -> Option<&str> {
        if self.search.is_empty() {
            None
        } else {
            Some(&self.search)
        }
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }
}

impl Default for ListFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 1, "", None)
    }
}

/// A flat row that can be listed; names the JSON array it is served under.
pub trait ListRow: Serialize {
    const COLLECTION: &'static str;
}

/// Paged result envelope returned by list endpoints.
///
/// Serializes as `{ total, page, last_page, <collection>: [...] }`.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub total: i64,
    pub page: i64,
    pub last_page: i64,
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: i64, filter: &ListFilter) -> Self {
        Self {
            total,
            page: filter.page(),
            last_page: calculate_last_page(filter.limit(), total),
            items,
        }
    }
}

impl<T: ListRow> Serialize for PageResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageResult", 4)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("page", &self.page)?;
        state.serialize_field("last_page", &self.last_page)?;
        state.serialize_field(T::COLLECTION, &self.items)?;
        state.end()
    }
}
