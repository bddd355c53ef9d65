pub use crate::ds::{EntryId, RecencyList};
pub use crate::error::{CacheError, InvariantError};
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait, ReadOnlyCache};
