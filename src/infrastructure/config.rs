use std::env;
use std::time::Duration;

use crate::integrations::{google_books, openlibrary};

#[derive(Debug, Clone)]
pub struct Config {
    pub google_books_url: String,
    pub openlibrary_covers_url: String,
    pub lookup_timeout_secs: u64,
    pub loan_period_days: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            google_books_url: env::var("GOOGLE_BOOKS_URL")
                .unwrap_or_else(|_| google_books::DEFAULT_BASE_URL.to_string()),
            openlibrary_covers_url: env::var("OPENLIBRARY_COVERS_URL")
                .unwrap_or_else(|_| openlibrary::DEFAULT_COVERS_URL.to_string()),
            lookup_timeout_secs: env::var("LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            loan_period_days: env::var("LOAN_PERIOD_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
        }
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            google_books_url: google_books::DEFAULT_BASE_URL.to_string(),
            openlibrary_covers_url: openlibrary::DEFAULT_COVERS_URL.to_string(),
            lookup_timeout_secs: 10,
            loan_period_days: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn from_env_uses_defaults_when_unset() {
        unsafe {
            env::remove_var("GOOGLE_BOOKS_URL");
            env::remove_var("LOOKUP_TIMEOUT_SECS");
        }
        let config = Config::from_env();
        assert_eq!(config.google_books_url, google_books::DEFAULT_BASE_URL);
        assert_eq!(config.lookup_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        unsafe {
            env::set_var("GOOGLE_BOOKS_URL", "http://localhost:9000");
            env::set_var("LOOKUP_TIMEOUT_SECS", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.google_books_url, "http://localhost:9000");
        assert_eq!(config.lookup_timeout_secs, 3);
        unsafe {
            env::remove_var("GOOGLE_BOOKS_URL");
            env::remove_var("LOOKUP_TIMEOUT_SECS");
        }
    }
}
