//! Content tier selection and language-style flags.

use serde::Serialize;

use crate::domain::content::{ContentTier, TieredText};
use crate::domain::learner::{InterfaceStyle, LearnerProfile, LiteracyLevel};

/// Which content tier to show `profile`.
///
/// Accessibility is checked first: basic literacy or the accessible
/// interface always selects `simple`, whatever the other fields say.
/// Then medium literacy or the simple interface selects `standard`;
/// everything else gets `advanced`.
pub fn content_tier_for(profile: &LearnerProfile) -> ContentTier {
    if profile.needs_accessible_presentation() {
        ContentTier::Simple
    } else if profile.literacy_level == LiteracyLevel::Medium
        || profile.interface_style == InterfaceStyle::Simple
    {
        ContentTier::Standard
    } else {
        ContentTier::Advanced
    }
}

/// Picks the variant of `text` suited to `profile`, with tier fallback.
pub fn adapted_text<'a>(text: &'a TieredText, profile: &LearnerProfile) -> Option<&'a str> {
    text.resolve(content_tier_for(profile))
}

/// Vocabulary flags used by copy that is written inline rather than tiered.
///
/// Unlike [`content_tier_for`] these flags are not exclusive: a basic-literacy
/// learner on the simple interface has both `simple` and `standard` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageStyle {
    pub simple: bool,
    pub standard: bool,
    pub advanced: bool,
}

pub fn language_style_for(profile: &LearnerProfile) -> LanguageStyle {
    LanguageStyle {
        simple: profile.needs_accessible_presentation(),
        standard: profile.literacy_level == LiteracyLevel::Medium
            || profile.interface_style == InterfaceStyle::Simple,
        advanced: profile.literacy_level == LiteracyLevel::High
            && profile.interface_style == InterfaceStyle::Premium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::profile::fixtures::premium_profile;

    fn with(literacy: LiteracyLevel, interface: InterfaceStyle) -> LearnerProfile {
        let mut p = premium_profile();
        p.literacy_level = literacy;
        p.interface_style = interface;
        p
    }

    #[test]
    fn basic_literacy_selects_simple() {
        let p = with(LiteracyLevel::Basic, InterfaceStyle::Premium);
        assert_eq!(content_tier_for(&p), ContentTier::Simple);
    }

    #[test]
    fn accessible_interface_overrides_high_literacy() {
        let p = with(LiteracyLevel::High, InterfaceStyle::Accessible);
        assert_eq!(content_tier_for(&p), ContentTier::Simple);
    }

    #[test]
    fn medium_literacy_or_simple_interface_selects_standard() {
        assert_eq!(
            content_tier_for(&with(LiteracyLevel::Medium, InterfaceStyle::Premium)),
            ContentTier::Standard
        );
        assert_eq!(
            content_tier_for(&with(LiteracyLevel::High, InterfaceStyle::Simple)),
            ContentTier::Standard
        );
    }

    #[test]
    fn high_literacy_premium_selects_advanced() {
        let p = with(LiteracyLevel::High, InterfaceStyle::Premium);
        assert_eq!(content_tier_for(&p), ContentTier::Advanced);
    }

    #[test]
    fn tier_is_total_over_profile_domain() {
        for profile in LearnerProfile::all() {
            let tier = content_tier_for(&profile);
            if profile.needs_accessible_presentation() {
                assert_eq!(tier, ContentTier::Simple);
            }
        }
    }

    #[test]
    fn adapted_text_falls_back_when_tier_missing() {
        let text = TieredText {
            simple: None,
            standard: Some("X".to_string()),
            advanced: Some("Y".to_string()),
        };
        let p = with(LiteracyLevel::Basic, InterfaceStyle::Accessible);
        assert_eq!(adapted_text(&text, &p), Some("X"));
    }

    #[test]
    fn language_flags_can_overlap() {
        let style = language_style_for(&with(LiteracyLevel::Basic, InterfaceStyle::Simple));
        assert!(style.simple);
        assert!(style.standard);
        assert!(!style.advanced);
    }

    #[test]
    fn language_flags_advanced_needs_high_literacy_and_premium() {
        let style = language_style_for(&with(LiteracyLevel::High, InterfaceStyle::Premium));
        assert_eq!(
            style,
            LanguageStyle {
                simple: false,
                standard: false,
                advanced: true
            }
        );
    }
}
