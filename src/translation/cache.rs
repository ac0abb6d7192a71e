/*!
 * Translation caching functionality.
 *
 * Memoizes bilingual display results so repeated requests for the same
 * (text, language, mode) tuple never reach the backend twice. The cache is
 * bounded: once capacity is hit, least-recently-used entries are evicted.
 */

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use lru::LruCache;
use parking_lot::{Mutex, RwLock};

use super::core::TranslationResult;

/// Default number of cached translations
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Composite cache key
///
/// The combination of all four fields, not any single one, determines cache
/// identity: the same text in a different display mode is a different entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Source text to translate
    text: String,

    /// Target language code
    target_language: String,

    /// Whether bilingual display was active
    bilingual_mode: bool,

    /// Whether the caller asked to show the original alongside
    show_original: bool,
}

impl CacheKey {
    /// Create a new cache key
    pub fn new(text: &str, target_language: &str, bilingual_mode: bool, show_original: bool) -> Self {
        Self {
            text: text.to_string(),
            target_language: target_language.to_string(),
            bilingual_mode,
            show_original,
        }
    }
}

/// Bounded cache for translation results
pub struct TranslationCache {
    /// Internal LRU storage
    cache: Arc<Mutex<LruCache<CacheKey, TranslationResult>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl TranslationCache {
    /// Create a new translation cache with the default capacity
    pub fn new(enabled: bool) -> Self {
        Self::with_capacity(enabled, DEFAULT_CACHE_CAPACITY)
    }

    /// Create a new translation cache bounded to `capacity` entries
    pub fn with_capacity(enabled: bool, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or_else(|| NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap());

        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Get a result from the cache, marking the entry recently used
    pub fn get(&self, key: &CacheKey) -> Option<TranslationResult> {
        if !self.enabled {
            return None;
        }

        let mut cache = self.cache.lock();

        match cache.get(key) {
            Some(result) => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!("Cache hit for '{}'", truncate_text(&key.text, 30));

                Some(result.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!("Cache miss for '{}'", truncate_text(&key.text, 30));

                None
            }
        }
    }

    /// Store a result in the cache, evicting the least-recently-used entry
    /// when at capacity
    pub fn store(&self, key: CacheKey, result: TranslationResult) {
        if !self.enabled {
            return;
        }

        let mut cache = self.cache.lock();

        debug!("Cached translation for '{}'", truncate_text(&key.text, 30));
        cache.put(key, result);
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache and reset counters
    pub fn clear(&self) {
        self.cache.lock().clear();

        let mut hits = self.hits.write();
        *hits = 0;

        let mut misses = self.misses.write();
        *misses = 0;

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Maximum number of entries the cache will hold
    pub fn capacity(&self) -> usize {
        self.cache.lock().cap().get()
    }

    /// Enable or disable the cache
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}
