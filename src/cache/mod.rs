//! Cache module for storing API responses to disk
//!
//! Each remote resource gets one JSON file recording where the payload came
//! from and when it was fetched. Entries are replaced atomically and judged
//! fresh against a configurable time-to-live.

mod manager;

pub use manager::{CacheEntry, CacheError, CacheManager};
