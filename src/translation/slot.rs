/*!
 * Display-slot staleness tracking.
 *
 * A UI element holding translated text may issue a new translation request
 * before the previous one resolves (text edited, language toggled). Each
 * slot hands out monotonically increasing request tokens; a resolution is
 * committed only when its token is still the slot's latest, so a late
 * response for a superseded request never overwrites a newer display.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use parking_lot::RwLock;

use super::core::{TranslateRequestOptions, TranslationResult, TranslationService};

/// Token identifying one issued request on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Lifecycle phase of a display slot
///
/// Fail-open means a failed request still resolves with a fallback result,
/// so failure re-enters `Resolved` carrying the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotPhase {
    /// No request has been issued yet
    Idle,
    /// A request is in flight
    Requesting,
    /// The latest request resolved and its result is displayed
    Resolved(TranslationResult),
}

/// Per-UI-slot request tracker enforcing last-requested-wins
pub struct DisplaySlot {
    /// Identity of the most recently issued request
    latest: Arc<AtomicU64>,

    /// Current phase, holding the displayed result when resolved
    phase: Arc<RwLock<SlotPhase>>,
}

impl DisplaySlot {
    /// Create an idle slot
    pub fn new() -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            phase: Arc::new(RwLock::new(SlotPhase::Idle)),
        }
    }

    /// Issue a new request token and enter the requesting phase
    ///
    /// Re-entrant from any phase: a newer token immediately supersedes any
    /// in-flight request.
    pub fn begin_request(&self) -> RequestToken {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *self.phase.write() = SlotPhase::Requesting;
        RequestToken(token)
    }

    /// Commit a resolved result if its token is still the latest
    ///
    /// Returns false and leaves the display untouched when the token has
    /// been superseded.
    pub fn commit(&self, token: RequestToken, result: TranslationResult) -> bool {
        if self.latest.load(Ordering::SeqCst) != token.0 {
            debug!(
                "Discarding stale translation for '{}' (request {} superseded)",
                result.original_text, token.0
            );
            return false;
        }

        *self.phase.write() = SlotPhase::Resolved(result);
        true
    }

    /// The currently displayed result, if any
    pub fn current(&self) -> Option<TranslationResult> {
        match &*self.phase.read() {
            SlotPhase::Resolved(result) => Some(result.clone()),
            _ => None,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SlotPhase {
        self.phase.read().clone()
    }
}

impl Default for DisplaySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DisplaySlot {
    fn clone(&self) -> Self {
        Self {
            latest: self.latest.clone(),
            phase: self.phase.clone(),
        }
    }
}

/// Run one translation request through a slot end to end
///
/// Issues a token, awaits the service, and commits the result. Returns true
/// when the result was committed, false when a newer request superseded it
/// while in flight.
pub async fn translate_into(
    slot: &DisplaySlot,
    service: &TranslationService,
    text: &str,
    request: TranslateRequestOptions,
) -> bool {
    let token = slot.begin_request();
    let result = service.translate_text(text, request).await;
    slot.commit(token, result)
}
