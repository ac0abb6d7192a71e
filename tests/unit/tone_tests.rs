/*!
 * Tests for contextual tone resolver functionality
 */

use std::collections::HashSet;
use std::str::FromStr;

use tonewell::tone::{DEFAULT_STYLE, ToneContext, contextual_tone};

#[test]
fn test_contextualTone_withWelcome_shouldReturnFixedProfile() {
    let profile = contextual_tone(ToneContext::Welcome);

    assert_eq!(
        profile.context_description,
        "warm and inviting, like greeting a dear friend"
    );
    assert_eq!(profile.contextual_styles, "tone-welcome");
    assert!(profile.contextual_prompt.contains(profile.context_description));
}

#[test]
fn test_contextualTone_withUnmappedStyle_shouldFallBackToDefault() {
    // Journal has a description but no dedicated style entry
    let profile = contextual_tone(ToneContext::Journal);

    assert_eq!(profile.contextual_styles, DEFAULT_STYLE);
    assert!(!profile.context_description.is_empty());
}

#[test]
fn test_contextualTone_forAllContexts_shouldNeverFail() {
    for context in ToneContext::ALL {
        let profile = contextual_tone(context);

        assert!(!profile.context_description.is_empty());
        assert!(!profile.contextual_styles.is_empty());
        assert!(profile.contextual_prompt.contains(profile.context_description));
    }
}

#[test]
fn test_contextualTone_calledTwice_shouldBeDeterministic() {
    for context in ToneContext::ALL {
        assert_eq!(contextual_tone(context), contextual_tone(context));
    }
}

#[test]
fn test_descriptions_shouldBeDistinct() {
    let descriptions: HashSet<&str> = ToneContext::ALL
        .iter()
        .map(|context| context.description())
        .collect();

    assert_eq!(descriptions.len(), ToneContext::ALL.len());
}

#[test]
fn test_fromStr_withValidNames_shouldRoundTrip() {
    for context in ToneContext::ALL {
        let parsed = ToneContext::from_str(&context.to_string()).unwrap();
        assert_eq!(parsed, context);
    }
}

#[test]
fn test_fromStr_withMixedCase_shouldParse() {
    assert_eq!(
        ToneContext::from_str("Celebration").unwrap(),
        ToneContext::Celebration
    );
}

#[test]
fn test_fromStr_withUnknownName_shouldFail() {
    assert!(ToneContext::from_str("sarcastic").is_err());
}
