/*!
 * Global filter configuration for the tone pipeline.
 *
 * The configuration is held by an explicitly owned `FilterStore` handle that
 * callers pass into the pipeline entry points, rather than a hidden global.
 * Mutation happens through `configure`, which merges a partial patch into a
 * fully new config and swaps it in as a single atomic replacement, so a
 * concurrent reader always sees either the fully-old or fully-new config.
 */

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Filtering toggles read by every pipeline call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalFilterConfig {
    /// Master switch for all message filtering
    pub enable_auto_filtering: bool,

    /// Keep the original text available for debug comparison logging
    pub preserve_original_for_comparison: bool,

    /// Log filter decisions at debug level
    pub debug_mode: bool,
}

impl Default for GlobalFilterConfig {
    fn default() -> Self {
        Self {
            enable_auto_filtering: true,
            preserve_original_for_comparison: false,
            debug_mode: false,
        }
    }
}

/// Partial update for `GlobalFilterConfig`
///
/// Every field is optional; unset fields leave the current value untouched.
/// Any partial shape is valid input, so applying a patch has no error
/// conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfigPatch {
    #[serde(default)]
    pub enable_auto_filtering: Option<bool>,

    #[serde(default)]
    pub preserve_original_for_comparison: Option<bool>,

    #[serde(default)]
    pub debug_mode: Option<bool>,
}

impl FilterConfigPatch {
    /// Produce a new config by merging this patch over `current`
    pub fn apply_to(&self, current: &GlobalFilterConfig) -> GlobalFilterConfig {
        GlobalFilterConfig {
            enable_auto_filtering: self
                .enable_auto_filtering
                .unwrap_or(current.enable_auto_filtering),
            preserve_original_for_comparison: self
                .preserve_original_for_comparison
                .unwrap_or(current.preserve_original_for_comparison),
            debug_mode: self.debug_mode.unwrap_or(current.debug_mode),
        }
    }
}

/// Shared handle to the pipeline's filter configuration
///
/// Cloning a `FilterStore` yields a second handle to the same configuration,
/// so a store created at startup can be handed to every pipeline component.
pub struct FilterStore {
    config: Arc<RwLock<Arc<GlobalFilterConfig>>>,
}

impl FilterStore {
    /// Create a store initialized with the default configuration
    pub fn new() -> Self {
        Self::with_config(GlobalFilterConfig::default())
    }

    /// Create a store initialized with an explicit configuration
    pub fn with_config(config: GlobalFilterConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Merge a partial patch and swap in the resulting config atomically
    ///
    /// The merge runs under the write lock, so concurrent writers with
    /// disjoint patches cannot lose each other's updates.
    pub fn configure(&self, patch: FilterConfigPatch) {
        let mut slot = self.config.write();
        *slot = Arc::new(patch.apply_to(slot.as_ref()));

        debug!("Filter configuration updated: {:?}", slot.as_ref());
    }

    /// Cheap snapshot of the current configuration
    pub fn snapshot(&self) -> Arc<GlobalFilterConfig> {
        self.config.read().clone()
    }

    /// Derived read of the master filtering switch
    pub fn is_enabled(&self) -> bool {
        self.config.read().enable_auto_filtering
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FilterStore {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
        }
    }
}
