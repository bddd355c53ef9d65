//! # Cache Trait Hierarchy
//!
//! Defines the operation surface of the library, split by mutability so that
//! read-only call sites can take `&self` and never disturb recency order.
//!
//! ## Architecture
//!
//! ```text
//!          ┌───────────────────────────────────────────┐
//!          │           ReadOnlyCache<K, V>             │
//!          │                                           │
//!          │  contains(&, &K) → bool                   │
//!          │  peek(&, &K) → Result<&V, CacheError>     │
//!          │  len(&) → usize                           │
//!          │  is_empty(&) → bool                       │
//!          │  is_full(&) → bool                        │
//!          │  capacity(&) → usize                      │
//!          └────────────────────┬──────────────────────┘
//!                               │
//!                               ▼
//!          ┌───────────────────────────────────────────┐
//!          │             CoreCache<K, V>               │
//!          │                                           │
//!          │  put(&mut, K, V) → Option<V>              │
//!          │  get(&mut, &K) → Result<&V, CacheError>   │
//!          │  delete(&mut, &K) → Option<V>             │
//!          │  set_capacity(&mut, usize)                │
//!          │  clear(&mut)                              │
//!          └────────────────────┬──────────────────────┘
//!                               │
//!                               ▼
//!          ┌───────────────────────────────────────────┐
//!          │           LruCacheTrait<K, V>             │
//!          │                                           │
//!          │  most_recently_used(&) → (&K, &V)         │
//!          │  least_recently_used(&) → (&K, &V)        │
//!          │  pop_lru(&mut) → Option<(K, V)>           │
//!          │  touch(&mut, &K) → bool                   │
//!          └───────────────────────────────────────────┘
//! ```
//!
//! ## Recency contract
//!
//! | Operation  | Affects recency? |
//! |------------|------------------|
//! | `get`      | yes — promotes to MRU |
//! | `put`      | yes — new or overwritten entry becomes MRU |
//! | `touch`    | yes — promotes to MRU |
//! | `peek`     | no  |
//! | `contains` | no  |
//! | `most_recently_used` / `least_recently_used` | no |
//!
//! Everything here is single-threaded by design: mutating operations take
//! `&mut self` and there is no internal synchronization. Callers that need
//! shared access must wrap the cache in their own lock.

use crate::error::CacheError;

/// Read-only cache operations. None of these affect recency order.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::{CoreCache, ReadOnlyCache};
///
/// fn hit_count<K, V, C: ReadOnlyCache<K, V>>(cache: &C, keys: &[K]) -> usize {
///     keys.iter().filter(|&key| cache.contains(key)).count()
/// }
///
/// let mut cache = LruCache::new(4);
/// cache.put(1u32, "one");
/// cache.put(2, "two");
/// assert_eq!(hit_count(&cache, &[1, 2, 3]), 2);
/// ```
pub trait ReadOnlyCache<K, V> {
    /// Checks whether `key` is present. Does not affect recency order.
    fn contains(&self, key: &K) -> bool;

    /// Returns the value for `key` without affecting recency order.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::error::CacheError;
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::{CoreCache, ReadOnlyCache};
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.put(1u32, "one");
    ///
    /// assert_eq!(cache.peek(&1), Ok(&"one"));
    /// assert_eq!(cache.peek(&9), Err(CacheError::NotFound));
    /// ```
    fn peek(&self, key: &K) -> Result<&V, CacheError>;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the entry count has reached the capacity bound.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Returns the capacity bound.
    fn capacity(&self) -> usize;
}

/// Mutating cache operations shared by every eviction policy.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::{CoreCache, ReadOnlyCache};
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(16);
/// warm(&mut cache, &[(1, "one".into()), (2, "two".into())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// existed.
    ///
    /// An existing key is overwritten in place and promoted to MRU. A new
    /// key is inserted at the MRU position; if the cache then exceeds its
    /// capacity, entries are evicted from the LRU tail until it fits.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(8);
    /// assert_eq!(cache.put(1u32, "first"), None);
    /// assert_eq!(cache.put(1, "second"), Some("first"));
    /// ```
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key` and promotes the entry to MRU.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is absent. A failed get
    /// leaves recency order untouched.
    fn get(&mut self, key: &K) -> Result<&V, CacheError>;

    /// Removes the entry for `key`, returning its value.
    ///
    /// Absent keys are a no-op (`None`).
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Updates the capacity bound.
    ///
    /// Shrinking below the current entry count evicts from the LRU tail
    /// until the count fits the new bound. Growing never evicts.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::{CoreCache, ReadOnlyCache};
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.put(1u32, "a");
    /// cache.put(2, "b");
    /// cache.put(3, "c");
    ///
    /// cache.set_capacity(1);
    /// assert_eq!(cache.len(), 1);
    /// assert!(cache.contains(&3)); // only the MRU entry survives
    /// ```
    fn set_capacity(&mut self, capacity: usize);

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}

/// LRU-specific operations over the recency ordering.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::{CoreCache, LruCacheTrait};
///
/// let mut cache = LruCache::new(3);
/// cache.put(1u32, "first");
/// cache.put(2, "second");
///
/// assert_eq!(cache.most_recently_used(), Ok((&2, &"second")));
/// assert_eq!(cache.least_recently_used(), Ok((&1, &"first")));
///
/// // get() promotes, flipping the order
/// cache.get(&1).unwrap();
/// assert_eq!(cache.most_recently_used(), Ok((&1, &"first")));
/// ```
pub trait LruCacheTrait<K, V>: CoreCache<K, V> {
    /// Returns the entry at the head of the recency ordering.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::EmptyCache`] if the cache holds no entries.
    fn most_recently_used(&self) -> Result<(&K, &V), CacheError>;

    /// Returns the entry at the tail of the recency ordering — the next
    /// eviction candidate.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::EmptyCache`] if the cache holds no entries.
    fn least_recently_used(&self) -> Result<(&K, &V), CacheError>;

    /// Removes and returns the least recently used entry.
    ///
    /// Returns `None` if the cache is empty.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Promotes `key` to MRU without retrieving its value.
    ///
    /// Returns `true` if the key was found and touched.
    fn touch(&mut self, key: &K) -> bool;
}
