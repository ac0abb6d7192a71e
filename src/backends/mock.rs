/*!
 * Mock translation backends for testing.
 *
 * This module provides mock backends that simulate different behaviors:
 * - `MockBackend::working()` - Always succeeds with a tagged translation
 * - `MockBackend::failing()` - Always fails with an error
 * - `MockBackend::failing_for(text)` - Fails only for one specific input
 * - `MockBackend::slow(delay_ms)` - Succeeds after a delay
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::backends::TranslationBackend;
use crate::errors::BackendError;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a tagged translation
    Working,
    /// Always fails with an error
    Failing,
    /// Fails only when the input text matches
    FailingFor(String),
    /// Succeeds after a fixed delay (for staleness and timeout testing)
    Slow {
        /// Delay before responding, in milliseconds
        delay_ms: u64,
    },
}

/// Mock backend for testing translation behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls received
    call_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock backend that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock backend that fails for one specific input
    pub fn failing_for(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::FailingFor(text.into()))
    }

    /// Create a mock backend that responds after a delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls received so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, usable after the backend is moved
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.call_count.clone()
    }

    /// Default translation: the text tagged with the target language
    fn respond(&self, text: &str, target_language: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(text, target_language),
            None => format!("[{}] {}", target_language, text),
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working => Ok(self.respond(text, target_language)),
            MockBehavior::Failing => Err(BackendError::RequestFailed(
                "mock backend configured to fail".to_string(),
            )),
            MockBehavior::FailingFor(needle) => {
                if text == needle {
                    Err(BackendError::RequestFailed(format!(
                        "mock backend configured to fail for '{}'",
                        needle
                    )))
                } else {
                    Ok(self.respond(text, target_language))
                }
            }
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                Ok(self.respond(text, target_language))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
