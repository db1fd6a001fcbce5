use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL used when deriving fixture links (default: "http://localhost:3000")
    pub base_url: String,
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` cache feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// DynamoDB table name (default: "matchday")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_table: String,
    /// Secret for signing bearer tokens (default: "change-me")
    pub jwt_secret: String,
    /// Token issuer claim (default: "matchday")
    pub jwt_issuer: String,
    /// Token lifetime in seconds (default: 86,400)
    pub jwt_expiry_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BASE_URL` - Base URL for fixture links (default: "http://localhost:3000")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "matchday")
    /// - `JWT_SECRET_KEY` - Token signing secret (default: "change-me")
    /// - `JWT_ISSUER` - Token issuer claim (default: "matchday")
    /// - `JWT_EXPIRY_SECONDS` - Token lifetime in seconds (default: 86,400)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            dynamodb_table: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "matchday".to_string()),
            jwt_secret: env::var("JWT_SECRET_KEY").unwrap_or_else(|_| "change-me".to_string()),
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "matchday".to_string()),
            jwt_expiry_seconds: env::var("JWT_EXPIRY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_ttl_conversion() {
        let config = Config {
            base_url: "http://localhost:3000".to_string(),
            cache_ttl_seconds: 600,
            cache_max_entries: 10_000,
            redis_url: "redis://localhost:6379".to_string(),
            dynamodb_table: "matchday".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_issuer: "matchday".to_string(),
            jwt_expiry_seconds: 3_600,
        };

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("BASE_URL");
        env::remove_var("CACHE_TTL_SECONDS");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("REDIS_URL");
        env::remove_var("DYNAMODB_TABLE_NAME");
        env::remove_var("JWT_SECRET_KEY");
        env::remove_var("JWT_ISSUER");
        env::remove_var("JWT_EXPIRY_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.dynamodb_table, "matchday");
        assert_eq!(config.jwt_issuer, "matchday");
        assert_eq!(config.jwt_expiry_seconds, 86_400);
    }
}
