/*!
 * # tonewell - emotional tone & bilingual text pipeline
 *
 * A Rust library that intercepts user-facing strings (errors, successes,
 * system notices, arbitrary copy) and rewrites them according to a tone
 * policy and a bilingual display mode before they reach the screen.
 *
 * ## Features
 *
 * - Soften error, success, and system messages with ordered rewrite rules
 * - Resolve per-context tone metadata (description, prompt, style class)
 * - Translate copy into a secondary language with bilingual pairing
 * - Cache-first translation with a bounded LRU cache
 * - Fail-open delivery: a backend failure never blocks rendering
 * - Last-requested-wins staleness handling per display slot
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `filter_config`: Shared filtering configuration with atomic updates
 * - `rules`: Pure message rewrite rules driven by the configuration
 * - `tone`: Contextual tone resolution
 * - `translation`: Bilingual translation services:
 *   - `translation::core`: Core translation service
 *   - `translation::cache`: Bounded caching of translation results
 *   - `translation::slot`: Per-slot request staleness tracking
 * - `backends`: Translation backend contract and implementations:
 *   - `backends::http`: Generic JSON HTTP translation client
 *   - `backends::mock`: Scripted backends for tests
 * - `errors`: Custom error types for the backend boundary
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod backends;
pub mod errors;
pub mod filter_config;
pub mod rules;
pub mod tone;
pub mod translation;

// Re-export main types for easier usage
pub use backends::TranslationBackend;
pub use errors::BackendError;
pub use filter_config::{FilterConfigPatch, FilterStore, GlobalFilterConfig};
pub use rules::{filter_error_message, filter_success_message, filter_system_message};
pub use tone::{ToneContext, ToneProfile, contextual_tone};
pub use translation::{
    DisplaySlot, Language, TranslateRequestOptions, TranslationResult, TranslationService,
};
