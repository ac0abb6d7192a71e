/*!
 * Bilingual translation subsystem.
 *
 * Turns user-facing copy into bilingual display results. Split into several
 * submodules:
 *
 * - `core`: The translation service and its result/option types
 * - `cache`: Bounded memoization of translation results
 * - `slot`: Per-display-slot staleness tracking (last-requested-wins)
 */

// Re-export main types for easier usage
pub use self::cache::{CacheKey, TranslationCache};
pub use self::core::{
    Language, TranslateRequestOptions, TranslationOptions, TranslationResult, TranslationService,
};
pub use self::slot::{DisplaySlot, RequestToken, SlotPhase, translate_into};

// Submodules
pub mod cache;
pub mod core;
pub mod slot;
