//! Partial profiles and canonical reconstruction.
//!
//! A non-preset code carries only three fields. Decoding parses those into a
//! [`PartialProfile`] and then derives the other seven from fixed rules. The
//! result is a canonical profile for those three fields, never the profile
//! that originally produced the code.

use serde::{Deserialize, Serialize};

use crate::domain::learner::{
    AccessibilityNeeds, ChallengeLevel, InterfaceStyle, LearnerProfile, LearningStyle,
    LiteracyLevel, Motivation, PacePreference, SocialLearning, TechComfort, TimePreference,
};

use super::code::TOKEN_COUNT;
use super::word_banks::{CHALLENGE_BANK, INTERFACE_BANK, STYLE_BANK};

/// The three fields a profile code carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialProfile {
    pub learning_style: LearningStyle,
    pub interface_style: InterfaceStyle,
    pub challenge_level: ChallengeLevel,
}

impl PartialProfile {
    /// Projects a full profile onto the encoded fields.
    pub fn of(profile: &LearnerProfile) -> Self {
        Self {
            learning_style: profile.learning_style,
            interface_style: profile.interface_style,
            challenge_level: profile.challenge_level,
        }
    }

    /// Derives a complete profile from the three known fields.
    pub fn reconstruct(&self) -> LearnerProfile {
        let challenge = self.challenge_level;
        let interface = self.interface_style;

        LearnerProfile {
            learning_style: self.learning_style,
            motivation: match challenge {
                ChallengeLevel::High => Motivation::Intrinsic,
                ChallengeLevel::Low => Motivation::Extrinsic,
                ChallengeLevel::Medium => Motivation::Mixed,
            },
            pace_preference: match challenge {
                ChallengeLevel::High => PacePreference::Fast,
                ChallengeLevel::Low => PacePreference::Slow,
                ChallengeLevel::Medium => PacePreference::Moderate,
            },
            challenge_level: challenge,
            social_learning: SocialLearning::Individual,
            time_preference: match challenge {
                ChallengeLevel::High => TimePreference::Long,
                ChallengeLevel::Low => TimePreference::Short,
                ChallengeLevel::Medium => TimePreference::Medium,
            },
            tech_comfort: match interface {
                InterfaceStyle::Premium => TechComfort::High,
                InterfaceStyle::Accessible => TechComfort::Low,
                InterfaceStyle::Simple => TechComfort::Medium,
            },
            interface_style: interface,
            accessibility_needs: match interface {
                InterfaceStyle::Accessible => AccessibilityNeeds::Visual,
                _ => AccessibilityNeeds::None,
            },
            literacy_level: match challenge {
                ChallengeLevel::High => LiteracyLevel::High,
                ChallengeLevel::Low => LiteracyLevel::Basic,
                ChallengeLevel::Medium => LiteracyLevel::Medium,
            },
        }
    }
}

/// Resolves a `style-interface-challenge` string against the word banks.
///
/// Returns `None` unless there are exactly three tokens and each one is in
/// its own bank. Matching is exact; callers normalize input beforehand.
pub fn parse_tokens(code: &str) -> Option<PartialProfile> {
    let tokens: Vec<&str> = code.split('-').collect();
    if tokens.len() != TOKEN_COUNT {
        return None;
    }

    let learning_style = STYLE_BANK.lookup(tokens[0])?;
    let interface_style = INTERFACE_BANK.lookup(tokens[1])?;
    let challenge_level = CHALLENGE_BANK.lookup(tokens[2])?;

    Some(PartialProfile {
        learning_style,
        interface_style,
        challenge_level,
    })
}
