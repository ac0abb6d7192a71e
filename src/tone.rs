/*!
 * Contextual tone resolution.
 *
 * Maps each UI tone context to a human-readable description, a prompt string
 * derived from it, and a style class. Descriptions are exhaustive over the
 * closed context set; the style map is deliberately partial and falls back to
 * one default style for unmapped contexts.
 */

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Emotional register of a UI location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneContext {
    Welcome,
    Dashboard,
    Journal,
    Community,
    Learning,
    Wellness,
    Celebration,
    Notification,
    Error,
    Success,
}

impl ToneContext {
    /// All contexts, in declaration order
    pub const ALL: [ToneContext; 10] = [
        Self::Welcome,
        Self::Dashboard,
        Self::Journal,
        Self::Community,
        Self::Learning,
        Self::Wellness,
        Self::Celebration,
        Self::Notification,
        Self::Error,
        Self::Success,
    ];

    /// Human-readable description of the context's emotional register
    ///
    /// This mapping is exhaustive; adding a context variant without a
    /// description is a compile error.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Welcome => "warm and inviting, like greeting a dear friend",
            Self::Dashboard => "encouraging and gently motivating",
            Self::Journal => "reflective, private, and judgment-free",
            Self::Community => "supportive and inclusive, among peers",
            Self::Learning => "patient and curious, never condescending",
            Self::Wellness => "calm, soothing, and restorative",
            Self::Celebration => "joyful and proud, sharing the moment",
            Self::Notification => "light and unobtrusive",
            Self::Error => "reassuring and blame-free",
            Self::Success => "affirming and heartfelt",
        }
    }

    /// Lowercase context identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Welcome => "welcome".to_string(),
            Self::Dashboard => "dashboard".to_string(),
            Self::Journal => "journal".to_string(),
            Self::Community => "community".to_string(),
            Self::Learning => "learning".to_string(),
            Self::Wellness => "wellness".to_string(),
            Self::Celebration => "celebration".to_string(),
            Self::Notification => "notification".to_string(),
            Self::Error => "error".to_string(),
            Self::Success => "success".to_string(),
        }
    }
}

impl std::fmt::Display for ToneContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ToneContext {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "welcome" => Ok(Self::Welcome),
            "dashboard" => Ok(Self::Dashboard),
            "journal" => Ok(Self::Journal),
            "community" => Ok(Self::Community),
            "learning" => Ok(Self::Learning),
            "wellness" => Ok(Self::Wellness),
            "celebration" => Ok(Self::Celebration),
            "notification" => Ok(Self::Notification),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(anyhow!("Invalid tone context: {}", s)),
        }
    }
}

/// Style class applied when a context has no entry in the style map
pub const DEFAULT_STYLE: &str = "tone-neutral";

/// Partial mapping from context to style class
///
/// Not every context carries a dedicated style; lookups for the rest fall
/// back to `DEFAULT_STYLE`.
static CONTEXT_STYLES: Lazy<HashMap<ToneContext, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (ToneContext::Welcome, "tone-welcome"),
        (ToneContext::Celebration, "tone-celebration"),
        (ToneContext::Wellness, "tone-wellness"),
        (ToneContext::Error, "tone-gentle"),
        (ToneContext::Success, "tone-warm"),
    ])
});

/// Resolved tone metadata for a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneProfile {
    /// Description of the context's emotional register
    pub context_description: &'static str,

    /// Prompt built by interpolating the description into a fixed template
    pub contextual_prompt: String,

    /// Style class for the context, or the default style
    pub contextual_styles: &'static str,
}

/// Resolve the tone profile for a context
///
/// Pure lookup: the same context always yields the same profile. Contexts
/// absent from the style map resolve to `DEFAULT_STYLE` rather than failing.
pub fn contextual_tone(context: ToneContext) -> ToneProfile {
    let description = context.description();

    ToneProfile {
        context_description: description,
        contextual_prompt: format!(
            "Write this message in a tone that is {}.",
            description
        ),
        contextual_styles: CONTEXT_STYLES
            .get(&context)
            .copied()
            .unwrap_or(DEFAULT_STYLE),
    }
}
