/*!
 * Message rule engine.
 *
 * Pure text transforms that soften user-facing copy before it reaches the
 * screen. The rule set is data: an ordered list of (pattern, replacement)
 * records folded over the evolving string, so later rules see the output of
 * earlier rules. Replacements are chosen so that no rule matches any rule's
 * output, which makes every transform stable after a single pass.
 *
 * All transforms are identity when `enable_auto_filtering` is off.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter_config::GlobalFilterConfig;
use crate::tone::ToneContext;

/// Ordered softening rules for error messages
///
/// Applied sequentially; each substitution is global over the string.
/// Patterns are case-sensitive.
static ERROR_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        // Technical "Error:" prefix becomes an empathetic reframing
        (Regex::new(r"Error:").unwrap(), "A little hiccup:"),
        // Blunt failure phrasing becomes a softened attempt
        (Regex::new(r"Failed to").unwrap(), "We couldn't quite"),
        // Hard refusal becomes a gentler one
        (Regex::new(r"Cannot").unwrap(), "We aren't able to"),
        // "Invalid" becomes descriptive rather than accusatory
        (Regex::new(r"Invalid").unwrap(), "Unrecognized"),
    ]
});

/// Warmth symbols recognized on success messages
///
/// `filter_success_message` appends the first symbol when none of the set is
/// already present, which keeps the transform idempotent.
pub const WARMTH_MARKERS: [&str; 4] = ["\u{1F49B}", "\u{1F338}", "\u{2728}", "\u{1F31F}"];

/// Soften an error message according to the ordered rule set
///
/// Text matching no rule passes through verbatim, whitespace and punctuation
/// included.
pub fn filter_error_message(text: &str, config: &GlobalFilterConfig) -> String {
    if !config.enable_auto_filtering {
        return text.to_string();
    }

    let filtered = ERROR_RULES
        .iter()
        .fold(text.to_string(), |current, (pattern, replacement)| {
            pattern.replace_all(&current, *replacement).into_owned()
        });

    log_transform("error", text, &filtered, config);
    filtered
}

/// Append a warmth marker to a success message unless one is already present
pub fn filter_success_message(text: &str, config: &GlobalFilterConfig) -> String {
    if !config.enable_auto_filtering {
        return text.to_string();
    }

    if WARMTH_MARKERS.iter().any(|marker| text.contains(marker)) {
        return text.to_string();
    }

    let filtered = format!("{} {}", text, WARMTH_MARKERS[0]);
    log_transform("success", text, &filtered, config);
    filtered
}

/// System message transform, keyed by tone context
///
/// Currently a passthrough. This is the extension point for per-context
/// system rules; implementations must stay pure functions of
/// (text, context, config) with no hidden state.
pub fn filter_system_message(
    text: &str,
    context: Option<ToneContext>,
    config: &GlobalFilterConfig,
) -> String {
    if !config.enable_auto_filtering {
        return text.to_string();
    }

    if config.debug_mode {
        match context {
            Some(ctx) => debug!("System message passthrough ({})", ctx),
            None => debug!("System message passthrough (no context)"),
        }
    }

    text.to_string()
}

/// Debug-log a transform, including the original when comparison is on
fn log_transform(kind: &str, original: &str, filtered: &str, config: &GlobalFilterConfig) {
    if !config.debug_mode || original == filtered {
        return;
    }

    if config.preserve_original_for_comparison {
        debug!("Filtered {} message: '{}' -> '{}'", kind, original, filtered);
    } else {
        debug!("Filtered {} message: '{}'", kind, filtered);
    }
}
