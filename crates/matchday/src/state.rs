//! Application state with service-based composition.
//!
//! The shared state passed to every request handler. Repositories and
//! the cache are constructed once per process by a feature-selected
//! factory, injected into the services, and never touched by handlers
//! directly.

use std::sync::Arc;

use matchday_core::cache::Cache;
use matchday_core::storage::{
    AdminRepository, FixtureRepository, TeamRepository, UserRepository,
};

use crate::config::Config;
use crate::services::{
    AuthService, AvailabilityChecker, FixtureScheduler, SearchService, TeamDirectory,
};

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state.
///
/// Cloned for each request handler; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<TeamDirectory>,
    pub fixtures: Arc<FixtureScheduler>,
    pub search: Arc<SearchService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Wires the services onto concrete repository and cache backends.
    fn build(
        team_repo: Arc<dyn TeamRepository>,
        fixture_repo: Arc<dyn FixtureRepository>,
        user_repo: Arc<dyn UserRepository>,
        admin_repo: Arc<dyn AdminRepository>,
        cache: Arc<dyn Cache>,
        config: &Config,
    ) -> Self {
        let availability = AvailabilityChecker::new(fixture_repo.clone());

        Self {
            teams: Arc::new(TeamDirectory::new(
                team_repo.clone(),
                cache.clone(),
                config.cache_ttl(),
            )),
            fixtures: Arc::new(FixtureScheduler::new(
                team_repo.clone(),
                fixture_repo.clone(),
                availability,
                cache.clone(),
                config.cache_ttl(),
                config.base_url.clone(),
            )),
            search: Arc::new(SearchService::new(
                team_repo,
                fixture_repo,
                cache,
                config.cache_ttl(),
            )),
            auth: Arc::new(AuthService::new(
                user_repo,
                admin_repo,
                config.jwt_secret.clone(),
                config.jwt_issuer.clone(),
                std::time::Duration::from_secs(config.jwt_expiry_seconds),
            )),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local runs and tests without external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo,
                cache,
                config,
            ))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo,
                cache,
                config,
            ))
        }
    }
}

#[cfg(all(feature = "dynamodb", feature = "memory"))]
mod dynamodb_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = Arc::new(DynamoDbRepository::new(
                client,
                config.dynamodb_table.clone(),
            ));
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo,
                cache,
                config,
            ))
        }
    }
}

#[cfg(all(feature = "dynamodb", feature = "redis"))]
mod dynamodb_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let repo = Arc::new(DynamoDbRepository::new(
                client,
                config.dynamodb_table.clone(),
            ));
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(
                repo.clone(),
                repo.clone(),
                repo.clone(),
                repo,
                cache,
                config,
            ))
        }
    }
}
