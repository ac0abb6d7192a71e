/*!
 * Translation backend implementations.
 *
 * The pipeline treats the actual translation engine as an external
 * collaborator behind the `TranslationBackend` trait:
 * - `http`: generic JSON HTTP translation API client
 * - `mock`: scripted backends for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;

/// Contract the pipeline expects from a translation engine
///
/// Implementations are assumed fallible; the translation service recovers
/// from any error by falling open to the original text.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate `text` into the language identified by `target_language`
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target_language` - ISO language code of the target language
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The translated text or an error
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, BackendError>;

    /// Short backend name used in logs
    fn name(&self) -> &str;
}

pub mod http;
pub mod mock;
