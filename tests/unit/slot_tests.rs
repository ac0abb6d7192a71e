/*!
 * Tests for display slot staleness tracking
 */

use tonewell::backends::mock::MockBackend;
use tonewell::translation::{
    DisplaySlot, Language, SlotPhase, TranslateRequestOptions, TranslationResult, translate_into,
};

use crate::common::secondary_service;

fn result_for(text: &str) -> TranslationResult {
    TranslationResult {
        display_text: format!("[vi] {}", text),
        original_text: text.to_string(),
        language: Language::Secondary,
        cached: false,
    }
}

#[test]
fn test_slot_new_shouldStartIdle() {
    let slot = DisplaySlot::new();

    assert_eq!(slot.phase(), SlotPhase::Idle);
    assert!(slot.current().is_none());
}

#[test]
fn test_beginRequest_shouldEnterRequestingPhase() {
    let slot = DisplaySlot::new();
    let _token = slot.begin_request();

    assert_eq!(slot.phase(), SlotPhase::Requesting);
}

#[test]
fn test_commit_withLatestToken_shouldInstallResult() {
    let slot = DisplaySlot::new();
    let token = slot.begin_request();

    assert!(slot.commit(token, result_for("A")));
    assert_eq!(slot.current().unwrap().original_text, "A");
}

#[test]
fn test_commit_withSupersededToken_shouldDiscardResult() {
    let slot = DisplaySlot::new();
    let token_a = slot.begin_request();
    let token_b = slot.begin_request();

    // "B" resolves first and wins
    assert!(slot.commit(token_b, result_for("B")));
    // "A" arrives late and must not overwrite the newer display
    assert!(!slot.commit(token_a, result_for("A")));

    assert_eq!(slot.current().unwrap().original_text, "B");
}

#[test]
fn test_commit_withSupersededToken_beforeLatestResolves_shouldLeaveRequesting() {
    let slot = DisplaySlot::new();
    let token_a = slot.begin_request();
    let _token_b = slot.begin_request();

    assert!(!slot.commit(token_a, result_for("A")));
    assert_eq!(slot.phase(), SlotPhase::Requesting);
    assert!(slot.current().is_none());
}

#[test]
fn test_beginRequest_afterResolved_shouldReenterRequesting() {
    let slot = DisplaySlot::new();
    let token = slot.begin_request();
    slot.commit(token, result_for("A"));

    let _next = slot.begin_request();
    assert_eq!(slot.phase(), SlotPhase::Requesting);
}

#[test]
fn test_slot_clone_shouldShareState() {
    let slot1 = DisplaySlot::new();
    let slot2 = slot1.clone();

    let token = slot1.begin_request();
    slot2.begin_request();

    // slot2's token supersedes slot1's on the shared tracker
    assert!(!slot1.commit(token, result_for("A")));
}

#[tokio::test]
async fn test_translateInto_withOverlappingRequests_shouldKeepLatest() {
    // Both requests ride the same slow backend; "A" was issued first, so it
    // resolves first and must be discarded in favor of "B".
    let service = std::sync::Arc::new(secondary_service(MockBackend::slow(30)));
    let slot = DisplaySlot::new();

    let slot_a = slot.clone();
    let service_a = service.clone();
    let first = tokio::spawn(async move {
        translate_into(&slot_a, &service_a, "A", TranslateRequestOptions::default()).await
    });

    // Give "A" a head start so its token is issued before "B"'s
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let token_b = slot.begin_request();
    let committed_a = first.await.unwrap();
    let result_b = service
        .translate_text("B", TranslateRequestOptions::default())
        .await;
    let committed_b = slot.commit(token_b, result_b);

    assert!(!committed_a);
    assert!(committed_b);
    assert_eq!(slot.current().unwrap().original_text, "B");
}

#[tokio::test]
async fn test_translateInto_withSingleRequest_shouldCommit() {
    let service = secondary_service(MockBackend::working());
    let slot = DisplaySlot::new();

    let committed =
        translate_into(&slot, &service, "Hello", TranslateRequestOptions::default()).await;

    assert!(committed);
    assert_eq!(slot.current().unwrap().display_text, "[vi] Hello");
}

#[tokio::test]
async fn test_translateInto_withFailingBackend_shouldCommitFallback() {
    let service = secondary_service(MockBackend::failing());
    let slot = DisplaySlot::new();

    let committed =
        translate_into(&slot, &service, "Hello", TranslateRequestOptions::default()).await;

    assert!(committed);
    assert_eq!(slot.current().unwrap().display_text, "Hello");
}
