//! Admin user listing.

use crate::db::Database;
use crate::errors::AppError;
use crate::models::pagination::{ListFilter, PageResult};
use crate::models::user::AdminUserRow;
use crate::services::listing::{self, Listing};

/// Projection never includes the password hash or identity documents.
pub const USERS: Listing = Listing {
    name: "users",
    columns: "u.id, u.first_name, u.last_name, u.username, u.email, u.access_level, \
              u.created_at, u.last_login",
    from: "users AS u",
    joins: &[],
    search_columns: &["u.username", "u.email", "u.first_name", "u.last_name"],
    sort_column: "u.username",
    tiebreak: "u.id",
    scope_column: None,
};

pub async fn list(db: &Database, filter: &ListFilter) -> Result<PageResult<AdminUserRow>, AppError> {
    listing::fetch_page(db, &USERS, filter, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_excludes_secrets() {
        let q = USERS.build(&ListFilter::new(10, 1, "ada", None), None);
        assert!(!q.data_sql.contains("password"));
        assert!(!q.data_sql.contains("document"));
        assert_eq!(q.binds.len(), 1);
    }
}
