//! Hand-authored preset profiles addressed by whole code.
//!
//! Decoding checks this dictionary before any word-bank lookup and returns
//! the authored profile unchanged. Presets may therefore carry field values
//! that reconstruction from the same words would not produce.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::learner::{
    AccessibilityNeeds, ChallengeLevel, InterfaceStyle, LearnerProfile, LearningStyle,
    LiteracyLevel, Motivation, PacePreference, SocialLearning, TechComfort, TimePreference,
};

/// One authored `(code, profile)` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub code: &'static str,
    pub profile: LearnerProfile,
}

/// The preset dictionary, in authored order.
pub static PRESETS: &[Preset] = &[
    Preset {
        code: "bright-eagle-summit",
        profile: LearnerProfile {
            learning_style: LearningStyle::Visual,
            motivation: Motivation::Intrinsic,
            pace_preference: PacePreference::Fast,
            challenge_level: ChallengeLevel::High,
            social_learning: SocialLearning::Individual,
            time_preference: TimePreference::Medium,
            tech_comfort: TechComfort::High,
            interface_style: InterfaceStyle::Premium,
            accessibility_needs: AccessibilityNeeds::None,
            literacy_level: LiteracyLevel::High,
        },
    },
    Preset {
        code: "wise-oak-bridge",
        profile: LearnerProfile {
            learning_style: LearningStyle::Reading,
            motivation: Motivation::Mixed,
            pace_preference: PacePreference::Moderate,
            challenge_level: ChallengeLevel::Medium,
            social_learning: SocialLearning::Individual,
            time_preference: TimePreference::Medium,
            tech_comfort: TechComfort::Medium,
            interface_style: InterfaceStyle::Simple,
            accessibility_needs: AccessibilityNeeds::None,
            literacy_level: LiteracyLevel::Medium,
        },
    },
    Preset {
        code: "gentle-calm-garden",
        profile: LearnerProfile {
            learning_style: LearningStyle::Visual,
            motivation: Motivation::Extrinsic,
            pace_preference: PacePreference::Slow,
            challenge_level: ChallengeLevel::Low,
            social_learning: SocialLearning::Individual,
            time_preference: TimePreference::Short,
            tech_comfort: TechComfort::Low,
            interface_style: InterfaceStyle::Accessible,
            accessibility_needs: AccessibilityNeeds::Visual,
            literacy_level: LiteracyLevel::Basic,
        },
    },
    Preset {
        code: "melodic-pine-flow",
        profile: LearnerProfile {
            learning_style: LearningStyle::Auditory,
            motivation: Motivation::Mixed,
            pace_preference: PacePreference::Moderate,
            challenge_level: ChallengeLevel::Medium,
            social_learning: SocialLearning::Group,
            time_preference: TimePreference::Medium,
            tech_comfort: TechComfort::Medium,
            interface_style: InterfaceStyle::Simple,
            accessibility_needs: AccessibilityNeeds::None,
            literacy_level: LiteracyLevel::Medium,
        },
    },
    Preset {
        code: "swift-falcon-peak",
        profile: LearnerProfile {
            learning_style: LearningStyle::Kinesthetic,
            motivation: Motivation::Intrinsic,
            pace_preference: PacePreference::Fast,
            challenge_level: ChallengeLevel::High,
            social_learning: SocialLearning::Mixed,
            time_preference: TimePreference::Long,
            tech_comfort: TechComfort::High,
            interface_style: InterfaceStyle::Premium,
            accessibility_needs: AccessibilityNeeds::None,
            literacy_level: LiteracyLevel::High,
        },
    },
];

static PRESET_INDEX: Lazy<HashMap<&'static str, &'static Preset>> =
    Lazy::new(|| PRESETS.iter().map(|p| (p.code, p)).collect());

/// The preset stored under exactly `code`.
pub fn preset(code: &str) -> Option<&'static Preset> {
    PRESET_INDEX.get(code).copied()
}

/// The preset whose authored profile equals `profile` in every field.
pub fn preset_for_profile(profile: &LearnerProfile) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.profile == *profile)
}

pub fn is_preset(code: &str) -> bool {
    PRESET_INDEX.contains_key(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup_is_exact() {
        assert!(preset("bright-eagle-summit").is_some());
        assert!(preset("Bright-Eagle-Summit").is_none());
        assert!(preset(" bright-eagle-summit").is_none());
    }

    #[test]
    fn preset_codes_are_unique() {
        assert_eq!(PRESET_INDEX.len(), PRESETS.len());
    }

    #[test]
    fn preset_profiles_are_distinct() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.profile, b.profile, "{} and {}", a.code, b.code);
            }
        }
    }

    #[test]
    fn reverse_lookup_finds_authored_profile() {
        let p = PRESETS[3].profile;
        assert_eq!(preset_for_profile(&p).map(|p| p.code), Some("melodic-pine-flow"));
    }

    #[test]
    fn reverse_lookup_misses_on_any_field_difference() {
        let mut p = PRESETS[0].profile;
        p.time_preference = TimePreference::Long;
        assert!(preset_for_profile(&p).is_none());
    }
}
