use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub database_max_lifetime: Duration,
    pub database_acquire_timeout: Duration,
    pub query_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: var_or("DATABASE_MAX_CONNECTIONS", 10),
            database_min_connections: var_or("DATABASE_MIN_CONNECTIONS", 5),
            database_max_lifetime: Duration::from_secs(var_or("DATABASE_MAX_LIFETIME_SECS", 300)),
            database_acquire_timeout: Duration::from_secs(var_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                5,
            )),
            query_timeout: Duration::from_millis(var_or("QUERY_TIMEOUT_MS", 3000)),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: var_or("BACKEND_PORT", 8000),
        })
    }
}

/// Read and parse an optional variable, falling back when absent or malformed.
fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_or_falls_back_when_missing() {
        let value: u32 = var_or("BOOKREVIEW_TEST_SURELY_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
    }
}
