//! Compiled pattern caching.

use lru::LruCache;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::pattern::to_regex;

/// Global cache for compiled layout patterns.
static CACHE: Mutex<Option<LruCache<String, Regex>>> = Mutex::new(None);

const CACHE_SIZE: usize = 64;

/// Get or compile the pattern for a layout, using the cache.
pub fn get_or_compile(layout: &str) -> Result<Regex, regex::Error> {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache =
        cache_guard.get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(re) = cache.get(layout) {
        return Ok(re.clone());
    }

    let re = Regex::new(&to_regex(layout))?;
    cache.put(layout.to_string(), re.clone());
    Ok(re)
}
