// ==============================================
// LRU BEHAVIORAL INVARIANT TESTS (integration)
// ==============================================
//
// End-to-end checks of the cache's externally observable contract:
// capacity bounds, promotion/non-promotion, eviction order, and the
// documented usage scenario. Operation-level edge cases live next to the
// engine in src/policy/lru.rs.

use lrukit::prelude::*;

// ==============================================
// Capacity Bound
// ==============================================

#[test]
fn len_never_exceeds_capacity_under_any_put_sequence() {
    let mut cache = LruCache::new(5);
    for i in 0..200u32 {
        cache.put(i % 17, i);
        assert!(
            cache.len() <= cache.capacity(),
            "len {} exceeded capacity {} after put #{i}",
            cache.len(),
            cache.capacity()
        );
        cache.check_invariants().unwrap();
    }
}

// ==============================================
// Promotion
// ==============================================

#[test]
fn get_makes_key_most_recently_used() {
    let mut cache = LruCache::new(4);
    for i in 1..=4u32 {
        cache.put(i, i * 10);
    }

    cache.get(&2).unwrap();
    assert_eq!(cache.most_recently_used(), Ok((&2, &20)));
}

#[test]
fn put_on_existing_key_makes_it_most_recently_used() {
    let mut cache = LruCache::new(4);
    for i in 1..=4u32 {
        cache.put(i, i * 10);
    }

    cache.put(1, 11);
    assert_eq!(cache.most_recently_used(), Ok((&1, &11)));
}

// ==============================================
// Non-Promotion
// ==============================================

#[test]
fn read_only_operations_never_change_recency_order() {
    let mut cache = LruCache::new(4);
    for i in 1..=4u32 {
        cache.put(i, i * 10);
    }

    let lru_before = *cache.least_recently_used().unwrap().0;
    let mru_before = *cache.most_recently_used().unwrap().0;

    assert!(cache.contains(&lru_before));
    cache.peek(&lru_before).unwrap();
    cache.get_or_default(&lru_before, 0);

    assert_eq!(*cache.least_recently_used().unwrap().0, lru_before);
    assert_eq!(*cache.most_recently_used().unwrap().0, mru_before);
}

// ==============================================
// Eviction Order
// ==============================================

#[test]
fn keys_evict_in_insertion_order_without_intervening_reads() {
    const CAPACITY: usize = 4;
    const INSERTS: u32 = 10;

    let mut cache = LruCache::new(CAPACITY);
    for i in 0..INSERTS {
        cache.put(i, i);
    }

    // exactly the first (INSERTS - CAPACITY) keys are gone
    let cutoff = INSERTS - CAPACITY as u32;
    for i in 0..cutoff {
        assert!(!cache.contains(&i), "key {i} should have been evicted");
    }
    for i in cutoff..INSERTS {
        assert!(cache.contains(&i), "key {i} should have survived");
    }
}

// ==============================================
// Shrink Triggers Eviction
// ==============================================

#[test]
fn shrinking_a_full_cache_keeps_the_most_recently_used_entries() {
    let mut cache = LruCache::new(6);
    for i in 1..=6u32 {
        cache.put(i, i);
    }
    // promote 2 and 5 so the survivors are not just the newest inserts
    cache.get(&2).unwrap();
    cache.get(&5).unwrap();

    cache.set_capacity(3);

    assert_eq!(cache.len(), 3);
    let survivors: Vec<u32> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(survivors, vec![5, 2, 6]);
    cache.check_invariants().unwrap();
}

// ==============================================
// Clear
// ==============================================

#[test]
fn clear_resets_fully() {
    let mut cache = LruCache::new(3);
    cache.put(1u32, "a");
    cache.put(2, "b");

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(!cache.contains(&1));
    assert_eq!(cache.most_recently_used(), Err(CacheError::EmptyCache));

    // the cache stays usable after a clear
    cache.put(7, "z");
    assert_eq!(cache.peek(&7), Ok(&"z"));
}

// ==============================================
// Documented Scenario
// ==============================================
//
// The literal walkthrough from the library documentation, step by step.

#[test]
fn documentation_scenario_plays_out_exactly() {
    // Step 1: capacity 1, second put evicts the first.
    let mut cache = LruCache::new(1);
    cache.put(1u32, "a");
    cache.put(2, "b");
    assert!(!cache.contains(&1));
    assert!(cache.contains(&2));

    // Step 2: grow to 2, both keys fit.
    cache.set_capacity(2);
    cache.put(1, "a");
    assert!(cache.contains(&1));
    assert!(cache.contains(&2));

    // Step 3: get(2) promotes it, so put(3) evicts key 1.
    assert_eq!(cache.get(&2), Ok(&"b"));
    cache.put(3, "c");
    assert!(!cache.contains(&1));
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
}

#[test]
fn documentation_scenario_peek_leaves_key_as_eviction_candidate() {
    // Step 4: peek does not promote, so the peeked key still evicts first.
    let mut cache = LruCache::new(2);
    cache.put(1u32, 1);
    cache.put(2, 2);

    assert_eq!(cache.peek(&1), Ok(&1));
    cache.put(3, 3);
    assert!(!cache.contains(&1));
}

#[test]
fn documentation_scenario_empty_cache_has_no_mru() {
    // Step 5: recency queries on an empty cache fail with EmptyCache.
    let cache: LruCache<u32, &str> = LruCache::new(1);
    assert_eq!(cache.most_recently_used(), Err(CacheError::EmptyCache));
}
