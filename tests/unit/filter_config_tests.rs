/*!
 * Tests for filter configuration store functionality
 */

use tonewell::filter_config::{FilterConfigPatch, FilterStore, GlobalFilterConfig};

#[test]
fn test_filterStore_new_withDefaults_shouldEnableFiltering() {
    let store = FilterStore::new();
    assert!(store.is_enabled());

    let config = store.snapshot();
    assert!(config.enable_auto_filtering);
    assert!(!config.preserve_original_for_comparison);
    assert!(!config.debug_mode);
}

#[test]
fn test_configure_withPartialPatch_shouldPreserveOtherFields() {
    let store = FilterStore::new();

    store.configure(FilterConfigPatch {
        debug_mode: Some(true),
        ..Default::default()
    });

    let config = store.snapshot();
    assert!(config.debug_mode);
    assert!(config.enable_auto_filtering);
    assert!(!config.preserve_original_for_comparison);
}

#[test]
fn test_configure_withEmptyPatch_shouldBeNoop() {
    let store = FilterStore::new();
    let before = store.snapshot();

    store.configure(FilterConfigPatch::default());

    assert_eq!(*store.snapshot(), *before);
}

#[test]
fn test_configure_withFullPatch_shouldReplaceAllFields() {
    let store = FilterStore::new();

    store.configure(FilterConfigPatch {
        enable_auto_filtering: Some(false),
        preserve_original_for_comparison: Some(true),
        debug_mode: Some(true),
    });

    let config = store.snapshot();
    assert!(!config.enable_auto_filtering);
    assert!(config.preserve_original_for_comparison);
    assert!(config.debug_mode);
    assert!(!store.is_enabled());
}

#[test]
fn test_snapshot_afterConfigure_shouldNotMutateEarlierSnapshot() {
    let store = FilterStore::new();
    let before = store.snapshot();

    store.configure(FilterConfigPatch {
        enable_auto_filtering: Some(false),
        ..Default::default()
    });

    // The old snapshot is a fully-old config, never a mix
    assert!(before.enable_auto_filtering);
    assert!(!store.snapshot().enable_auto_filtering);
}

#[test]
fn test_configure_withConcurrentDisjointPatches_shouldApplyBoth() {
    use std::sync::{Arc, Barrier};
    use std::thread;

    for _ in 0..200 {
        let store = FilterStore::new();
        let barrier = Arc::new(Barrier::new(2));

        let store_a = store.clone();
        let barrier_a = barrier.clone();
        let writer_a = thread::spawn(move || {
            barrier_a.wait();
            store_a.configure(FilterConfigPatch {
                debug_mode: Some(true),
                ..Default::default()
            });
        });

        let store_b = store.clone();
        let barrier_b = barrier.clone();
        let writer_b = thread::spawn(move || {
            barrier_b.wait();
            store_b.configure(FilterConfigPatch {
                preserve_original_for_comparison: Some(true),
                ..Default::default()
            });
        });

        writer_a.join().unwrap();
        writer_b.join().unwrap();

        // Neither writer's field may be lost, whichever ran first
        let config = store.snapshot();
        assert!(config.debug_mode);
        assert!(config.preserve_original_for_comparison);
        assert!(config.enable_auto_filtering);
    }
}

#[test]
fn test_clone_shouldShareConfiguration() {
    let store1 = FilterStore::new();
    let store2 = store1.clone();

    store1.configure(FilterConfigPatch {
        enable_auto_filtering: Some(false),
        ..Default::default()
    });

    assert!(!store2.is_enabled());
}

#[test]
fn test_patch_fromJson_withSubsetOfFields_shouldDeserialize() {
    let patch: FilterConfigPatch = serde_json::from_str(r#"{"debug_mode": true}"#).unwrap();
    let merged = patch.apply_to(&GlobalFilterConfig::default());

    assert!(merged.debug_mode);
    assert!(merged.enable_auto_filtering);
}
