//! # Least Recently Used (LRU) Cache
//!
//! Single-threaded, fixed-capacity LRU cache with O(1) lookup, promotion,
//! and eviction.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V>                         │
//!   │                                                              │
//!   │   ┌────────────────────────────────────────────────────┐     │
//!   │   │  FxHashMap<K, EntryId> (index)                     │     │
//!   │   │                                                    │     │
//!   │   │  key ──► EntryId into the recency list             │     │
//!   │   └───────────────────────┬────────────────────────────┘     │
//!   │                           │                                  │
//!   │   ┌───────────────────────▼────────────────────────────┐     │
//!   │   │  RecencyList<Entry<K, V>>                          │     │
//!   │   │                                                    │     │
//!   │   │  head ─► [entry] ◄──► [entry] ◄──► [entry] ◄─ tail │     │
//!   │   │          (MRU)                     (LRU)           │     │
//!   │   └────────────────────────────────────────────────────┘     │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys and values live in the arena entries; the index holds a clone of
//! each key so membership tests and promotions are a single hash lookup.
//! No raw pointers anywhere — entry handles are arena indices.
//!
//! ## Operations
//!
//! | Method                                           | Complexity | Recency effect     |
//! |--------------------------------------------------|------------|--------------------|
//! | `put(k, v)`                                      | O(1)*      | entry becomes MRU  |
//! | `get(&k)`                                        | O(1)       | entry becomes MRU  |
//! | `peek(&k)` / `contains(&k)`                      | O(1)       | none               |
//! | `delete(&k)`                                     | O(1)       | entry removed      |
//! | `touch(&k)`                                      | O(1)       | entry becomes MRU  |
//! | `pop_lru()`                                      | O(1)       | tail removed       |
//! | `most_recently_used()` / `least_recently_used()` | O(1)       | none               |
//! | `set_capacity(n)`                                | O(excess)  | tail evictions     |
//! | `clear()`                                        | O(n)       | everything removed |
//!
//! \* A single `put` evicts at most `O(excess)` tail entries; amortized O(1)
//! when capacity changes are rare.
//!
//! ## Invariants
//!
//! Hold before and after every public operation, including failed ones:
//!
//! 1. The index key set equals the recency-list key set (no orphans).
//! 2. `len() <= capacity()` after every operation.
//! 3. Only `get`, `put`, and `touch` change recency order.
//! 4. Shrinking capacity evicts from the tail until the bound holds;
//!    growing never evicts.
//!
//! [`LruCache::check_invariants`] verifies 1 and 2 plus link integrity.
//!
//! ## Example
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = LruCache::new(2);
//! cache.put(1, "one");
//! cache.put(2, "two");
//!
//! // get() promotes key 1, so key 2 becomes the eviction candidate
//! assert_eq!(cache.get(&1), Ok(&"one"));
//! cache.put(3, "three");
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```
//!
//! ## Thread Safety
//!
//! **Not thread-safe.** All mutating operations take `&mut self` and there
//! is no internal synchronization; concurrent mutation requires an external
//! lock around every call.

use std::fmt;
use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::ds::recency_list::{EntryId, RecencyList};
use crate::error::{CacheError, InvariantError};
use crate::traits::{CoreCache, LruCacheTrait, ReadOnlyCache};

/// Capacity used by [`LruCache::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Key-value pair stored in the recency list.
///
/// The key is duplicated here (the index owns its own clone) so tail
/// eviction can remove the index entry without a reverse lookup.
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A fixed-capacity LRU cache.
///
/// Values are stored directly, without `Arc` wrapping. Keys need
/// `Eq + Hash + Clone`; values are unconstrained except where a method
/// returns an owned value.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::{CoreCache, ReadOnlyCache};
///
/// let mut cache: LruCache<u64, String> = LruCache::new(100);
/// cache.put(1, "page".to_string());
/// assert_eq!(cache.len(), 1);
/// ```
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, EntryId>,
    order: RecencyList<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with the given capacity.
    ///
    /// A capacity of 0 is honored literally: the cache accepts no entries
    /// and every `put` is dropped immediately.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: RecencyList::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    ///
    /// Peek semantics: never inserts, never affects recency order.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::{CoreCache, ReadOnlyCache};
    ///
    /// let mut cache = LruCache::new(4);
    /// cache.put(1u32, 10);
    ///
    /// assert_eq!(cache.get_or_default(&1, 0), 10);
    /// assert_eq!(cache.get_or_default(&9, 0), 0);
    /// assert!(!cache.contains(&9)); // nothing was inserted
    /// ```
    pub fn get_or_default(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        match self.peek(key) {
            Ok(value) => value.clone(),
            Err(_) => default,
        }
    }

    /// Returns the value for `key`, inserting `default` if the key is absent.
    ///
    /// On a hit the existing value is returned and recency order is left
    /// untouched — unlike [`get`](CoreCache::get), this operation does not
    /// promote. On a miss `default` is inserted at the MRU position
    /// (subject to eviction, including immediate eviction at capacity 0)
    /// and returned.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::{CoreCache, ReadOnlyCache};
    ///
    /// let mut cache = LruCache::new(4);
    /// assert_eq!(cache.get_or_insert(1u32, "a"), "a");
    /// assert_eq!(cache.get_or_insert(1, "b"), "a"); // existing value wins
    /// assert!(cache.contains(&1));
    /// ```
    pub fn get_or_insert(&mut self, key: K, default: V) -> V
    where
        V: Clone,
    {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get(id) {
                return entry.value.clone();
            }
        }
        self.put(key, default.clone());
        default
    }

    /// Returns an iterator over `(&K, &V)` pairs from MRU to LRU.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Verifies the index/ordering invariants.
    ///
    /// Checks that the index and the recency list agree entry-for-entry,
    /// that the list links form a single chain, and that the entry count
    /// respects the capacity bound. O(n).
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but recency list has {} entries",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            )));
        }

        let mut walked = 0usize;
        for entry in self.order.iter() {
            match self.index.get(&entry.key) {
                Some(&id) if self.order.get(id).map_or(false, |e| e.key == entry.key) => {},
                Some(_) => {
                    return Err(InvariantError::new(
                        "index entry points at a slot holding a different key",
                    ));
                },
                None => {
                    return Err(InvariantError::new(
                        "recency list holds a key absent from the index",
                    ));
                },
            }
            walked += 1;
            if walked > self.order.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
        }
        if walked != self.order.len() {
            return Err(InvariantError::new(format!(
                "recency list chain has {} entries but {} are stored",
                walked,
                self.order.len()
            )));
        }

        Ok(())
    }

    /// Evicts from the LRU tail until the entry count fits the capacity.
    fn evict_to_capacity(&mut self) {
        while self.order.len() > self.capacity {
            match self.order.pop_back() {
                Some(entry) => {
                    self.index.remove(&entry.key);
                },
                None => break,
            }
        }
    }
}

impl<K, V> ReadOnlyCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn peek(&self, key: &K) -> Result<&V, CacheError> {
        let id = *self.index.get(key).ok_or(CacheError::NotFound)?;
        self.order
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(CacheError::NotFound)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            let previous = self
                .order
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value))?;
            self.order.move_to_front(id);
            return Some(previous);
        }

        // Zero capacity: the entry would be evicted before the call returns.
        if self.capacity == 0 {
            return None;
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        self.evict_to_capacity();

        #[cfg(debug_assertions)]
        self.order.debug_validate();

        None
    }

    #[inline]
    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        let id = *self.index.get(key).ok_or(CacheError::NotFound)?;
        self.order.move_to_front(id);
        self.order
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(CacheError::NotFound)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let entry = self.order.remove(id)?;

        #[cfg(debug_assertions)]
        self.order.debug_validate();

        Some(entry.value)
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict_to_capacity();

        #[cfg(debug_assertions)]
        self.order.debug_validate();
    }

    fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn most_recently_used(&self) -> Result<(&K, &V), CacheError> {
        self.order
            .front()
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(CacheError::EmptyCache)
    }

    #[inline]
    fn least_recently_used(&self) -> Result<(&K, &V), CacheError> {
        self.order
            .back()
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(CacheError::EmptyCache)
    }

    fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.order.pop_back()?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.order.move_to_front(id),
            None => false,
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with [`DEFAULT_CAPACITY`].
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
