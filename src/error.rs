//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by key-requiring reads (`get`, `peek`) when the
//!   key is absent, and by the recency queries (`most_recently_used`,
//!   `least_recently_used`) when the cache is empty.
//! - [`InvariantError`]: Returned by [`LruCache::check_invariants`] when the
//!   index and the recency ordering disagree.
//!
//! Every error is a local, recoverable condition: a failed operation never
//! mutates the cache, and callers can retry after mutating it themselves.
//!
//! [`LruCache::check_invariants`]: crate::policy::lru::LruCache::check_invariants
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::CacheError;
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::{LruCacheTrait, ReadOnlyCache};
//!
//! let cache: LruCache<u32, &str> = LruCache::new(4);
//! assert_eq!(cache.peek(&1), Err(CacheError::NotFound));
//! assert_eq!(cache.most_recently_used(), Err(CacheError::EmptyCache));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Recoverable failure conditions surfaced by cache read operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested key is not present in the cache.
    ///
    /// Returned by `get` and `peek`. Key absence is a stable fact until the
    /// caller mutates the cache; there is nothing transient to retry.
    NotFound,

    /// The cache holds no entries.
    ///
    /// Returned by `most_recently_used` and `least_recently_used`.
    EmptyCache,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::NotFound => f.write_str("key not found in cache"),
            CacheError::EmptyCache => f.write_str("cache is empty"),
        }
    }
}

impl std::error::Error for CacheError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
