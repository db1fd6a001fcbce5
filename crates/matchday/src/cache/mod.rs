//! Cache backend implementations.
//!
//! Concrete implementations of `matchday_core::cache::Cache`, selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): in-process LRU cache with TTL support
//! - `redis`: Redis cache using the connection manager for pooling

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p matchday --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
