/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which turns raw
 * copy into a bilingual display result. Requests are cache-first, run under a
 * bounded timeout, and fail open: a backend error resolves to the original
 * text instead of surfacing to the caller.
 */

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::cache::{CacheKey, TranslationCache};
use crate::backends::TranslationBackend;

/// Which of the two configured languages a result is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The language the copy is authored in
    Primary,
    /// The translation target
    Secondary,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// Outcome of a translation request
///
/// Immutable once created; the same (text, language, mode) tuple always
/// produces an equal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Text ready for display, possibly a bilingual pairing
    pub display_text: String,

    /// The untransformed input text
    pub original_text: String,

    /// Language the display text targets
    pub language: Language,

    /// Whether this result was served from the cache
    pub cached: bool,
}

impl TranslationResult {
    /// A passthrough result that displays the input unchanged
    fn passthrough(text: &str, language: Language) -> Self {
        Self {
            display_text: text.to_string(),
            original_text: text.to_string(),
            language,
            cached: false,
        }
    }
}

/// Options for customizing the translation service
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    /// ISO code of the authored language
    pub primary_language: String,

    /// ISO code of the translation target
    pub secondary_language: String,

    /// Show original and translated text together
    pub bilingual_mode: bool,

    /// Deadline for a single backend call, in milliseconds
    pub timeout_ms: u64,

    /// Maximum number of cached results
    pub cache_capacity: usize,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            primary_language: "en".to_string(),
            secondary_language: "vi".to_string(),
            bilingual_mode: false,
            timeout_ms: 10_000,
            cache_capacity: super::cache::DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Per-request options supplied by the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateRequestOptions {
    /// Show the original alongside the translation for this request
    pub show_original: bool,
}

/// Main translation service producing bilingual display results
pub struct TranslationService {
    /// Backend implementation
    backend: Arc<dyn TranslationBackend>,

    /// Configuration for the translation service
    pub options: TranslationOptions,

    /// Currently displayed language
    language: RwLock<Language>,

    /// Whether bilingual display is active
    bilingual_mode: RwLock<bool>,

    /// Translation cache for storing and retrieving results
    pub cache: TranslationCache,
}

impl TranslationService {
    /// Create a new translation service with the given backend and options
    pub fn new(backend: Arc<dyn TranslationBackend>, options: TranslationOptions) -> Self {
        let cache = TranslationCache::with_capacity(true, options.cache_capacity);
        let bilingual_mode = options.bilingual_mode;

        Self {
            backend,
            options,
            language: RwLock::new(Language::Primary),
            bilingual_mode: RwLock::new(bilingual_mode),
            cache,
        }
    }

    /// Create a service with default options
    pub fn with_backend(backend: Arc<dyn TranslationBackend>) -> Self {
        Self::new(backend, TranslationOptions::default())
    }

    /// Currently displayed language
    pub fn language(&self) -> Language {
        *self.language.read()
    }

    /// Switch the displayed language
    pub fn set_language(&self, language: Language) {
        *self.language.write() = language;
    }

    /// Whether bilingual display is active
    pub fn bilingual_mode(&self) -> bool {
        *self.bilingual_mode.read()
    }

    /// Toggle bilingual display
    pub fn set_bilingual_mode(&self, bilingual: bool) {
        *self.bilingual_mode.write() = bilingual;
    }

    /// Translate text for display
    ///
    /// Cache-first: a previously resolved (text, language, mode) tuple is
    /// served without a backend call. On a miss the backend runs under the
    /// configured timeout; any failure resolves to the original text
    /// (fail-open) and is logged exactly once. This method never returns an
    /// error.
    pub async fn translate_text(
        &self,
        text: &str,
        request: TranslateRequestOptions,
    ) -> TranslationResult {
        // In the primary language the text is already in its authored form.
        if self.language() == Language::Primary {
            return TranslationResult::passthrough(text, Language::Primary);
        }

        let bilingual = self.bilingual_mode();
        let target = self.options.secondary_language.clone();
        let key = CacheKey::new(text, &target, bilingual, request.show_original);

        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let deadline = Duration::from_millis(self.options.timeout_ms);
        let outcome = tokio::time::timeout(deadline, self.backend.translate(text, &target)).await;

        let translated = match outcome {
            Ok(Ok(translated)) => translated,
            Ok(Err(error)) => {
                warn!(
                    "Translation backend '{}' failed for '{}', falling back to original: {}",
                    self.backend.name(),
                    text,
                    error
                );
                return TranslationResult::passthrough(text, Language::Secondary);
            }
            Err(_) => {
                warn!(
                    "Translation backend '{}' timed out after {} ms for '{}', falling back to original",
                    self.backend.name(),
                    self.options.timeout_ms,
                    text
                );
                return TranslationResult::passthrough(text, Language::Secondary);
            }
        };

        let display_text = if bilingual || request.show_original {
            format!("{} ({})", translated, text)
        } else {
            translated
        };

        let result = TranslationResult {
            display_text,
            original_text: text.to_string(),
            language: Language::Secondary,
            cached: false,
        };

        // Cache hits carry cached = true so every hit for a key is equal.
        let mut stored = result.clone();
        stored.cached = true;
        self.cache.store(key, stored);

        debug!("Translated '{}' -> secondary language", text);
        result
    }
}
