//! lrukit: a fixed-capacity, single-threaded LRU cache.
//!
//! The engine lives in [`policy::lru::LruCache`]; the operation surface is
//! defined by the traits in [`traits`].

pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;
