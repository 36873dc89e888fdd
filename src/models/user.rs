//! User list rows for the admin console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::pagination::ListRow;

/// Access level stored on `users.access_level`.
pub const ACCESS_LEVEL_ADMIN: i32 = 1;
pub const ACCESS_LEVEL_READER: i32 = 2;

/// User summary for admin listings; excludes the password hash and KYC fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminUserRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub access_level: i32,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl ListRow for AdminUserRow {
    const COLLECTION: &'static str = "users";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_user_row_has_no_password() {
        let json = serde_json::to_string(&AdminUserRow {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            access_level: ACCESS_LEVEL_ADMIN,
            created_at: Utc::now(),
            last_login: None,
        })
        .unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"last_login\":null"));
    }
}
