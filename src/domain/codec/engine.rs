//! encode / decode / describe.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::learner::{ChallengeLevel, InterfaceStyle, LearnerProfile, LearningStyle};

use super::code::ProfileCode;
use super::presets::{preset, preset_for_profile, PRESETS};
use super::reconstruct::{parse_tokens, PartialProfile};
use super::word_banks::{WordBank, CHALLENGE_BANK, INTERFACE_BANK, STYLE_BANK, WORDS_PER_VALUE};

/// Sentence `describe` returns for a code that does not decode.
pub const UNKNOWN_PROFILE: &str = "Unknown profile";

/// Encodes a profile as a shareable code.
///
/// A profile equal to an authored preset gets the preset's code. Any other
/// profile gets the first word of each bank for its style, interface and
/// challenge; the remaining seven fields are not carried.
pub fn encode(profile: &LearnerProfile) -> ProfileCode {
    if let Some(preset) = preset_for_profile(profile) {
        return ProfileCode::from_trusted(preset.code);
    }

    let partial = PartialProfile::of(profile);
    // Word banks cover every variant; checked by verify_tables at startup.
    ProfileCode::from_words(
        STYLE_BANK.primary_word(partial.learning_style).unwrap_or_default(),
        INTERFACE_BANK.primary_word(partial.interface_style).unwrap_or_default(),
        CHALLENGE_BANK.primary_word(partial.challenge_level).unwrap_or_default(),
    )
}

/// Decodes a code into a profile.
///
/// Presets are matched first and returned as authored. Otherwise the code
/// must be exactly three bank words, and the profile is reconstructed from
/// those three fields. Matching is exact; no trimming or case folding.
pub fn decode(code: &str) -> Option<LearnerProfile> {
    if let Some(preset) = preset(code) {
        return Some(preset.profile);
    }

    let decoded = parse_tokens(code).map(|partial| partial.reconstruct());
    if decoded.is_none() {
        tracing::debug!(code, "Profile code did not decode");
    }
    decoded
}

/// Renders a short sentence for a code, or [`UNKNOWN_PROFILE`].
pub fn describe(code: &str) -> String {
    match decode(code) {
        Some(profile) => describe_profile(&profile),
        None => UNKNOWN_PROFILE.to_string(),
    }
}

/// The `describe` sentence for an already decoded profile.
pub fn describe_profile(profile: &LearnerProfile) -> String {
    format!(
        "{} with {} and {}",
        style_noun(profile.learning_style),
        interface_noun(profile.interface_style),
        challenge_noun(profile.challenge_level)
    )
}

fn style_noun(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => "visual learner",
        LearningStyle::Auditory => "auditory learner",
        LearningStyle::Kinesthetic => "hands-on learner",
        LearningStyle::Reading => "reading-focused learner",
    }
}

fn interface_noun(interface: InterfaceStyle) -> &'static str {
    match interface {
        InterfaceStyle::Premium => "advanced interface",
        InterfaceStyle::Simple => "clean interface",
        InterfaceStyle::Accessible => "accessible design",
    }
}

fn challenge_noun(challenge: ChallengeLevel) -> &'static str {
    match challenge {
        ChallengeLevel::High => "high challenge",
        ChallengeLevel::Medium => "balanced approach",
        ChallengeLevel::Low => "gentle progression",
    }
}

/// A preset code with its description, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub code: &'static str,
    pub description: String,
}

/// Every preset, in authored order.
pub fn preset_codes() -> Vec<PresetSummary> {
    PRESETS
        .iter()
        .map(|p| PresetSummary {
            code: p.code,
            description: describe_profile(&p.profile),
        })
        .collect()
}

/// Checks the static codec tables for consistency.
///
/// Every enum value needs a full word list, words must not repeat across
/// banks, and every preset code must have a valid shape.
pub fn verify_tables() -> Result<(), DomainError> {
    check_bank(&STYLE_BANK, LearningStyle::ALL)?;
    check_bank(&INTERFACE_BANK, InterfaceStyle::ALL)?;
    check_bank(&CHALLENGE_BANK, ChallengeLevel::ALL)?;

    let mut seen = std::collections::HashSet::new();
    for word in STYLE_BANK
        .words()
        .chain(INTERFACE_BANK.words())
        .chain(CHALLENGE_BANK.words())
    {
        if !seen.insert(word) {
            return Err(table_error(format!("word '{}' appears in more than one slot", word)));
        }
    }

    for preset in PRESETS {
        ProfileCode::parse(preset.code)
            .map_err(|e| table_error(format!("preset '{}': {}", preset.code, e)))?;
    }

    Ok(())
}

fn check_bank<T: Copy + PartialEq + std::fmt::Display>(
    bank: &WordBank<T>,
    values: &[T],
) -> Result<(), DomainError> {
    for value in values {
        if bank.words_for(*value).len() != WORDS_PER_VALUE {
            return Err(table_error(format!(
                "{} bank has no full word list for '{}'",
                bank.name(),
                value
            )));
        }
    }
    Ok(())
}

fn table_error(message: String) -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Profile code tables are inconsistent")
        .with_detail("reason", message)
}
