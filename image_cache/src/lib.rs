mod disk_cache;
pub mod errors;

pub use disk_cache::{CachedImageObject, DiskCache, MAX_CACHE_AGE};
pub use errors::CacheError;
