//! Assessment scoring engine.
//!
//! Converts an [`AnswerSet`] into a [`LearnerProfile`]. The function is total
//! over every prefix of the answer sequence: unanswered questions fall back to
//! a per-field default, so a profile can be previewed mid-assessment.
//!
//! # Defaults for unanswered questions
//!
//! | Slot | Default weight | Resulting value |
//! |------|----------------|-----------------|
//! | learning style | none | `reading` |
//! | tech comfort | 2 | `medium` |
//! | interface preference | 2 | (feeds interface rule) |
//! | reading preference | 2 | `medium` literacy |
//! | accessibility | 4 | `none` |
//! | motivation | 1 | `intrinsic` |
//! | pace | 2 | `moderate` |
//! | challenge | 2 | `medium` |
//! | time | 2 | `medium` |
//!
//! `social_learning` has no question and is always `individual`.

use serde::Serialize;

use crate::domain::foundation::{threshold, Rule, RuleChain};
use crate::domain::learner::{
    AccessibilityNeeds, ChallengeLevel, InterfaceStyle, LearnerProfile, LearningStyle,
    LiteracyLevel, Motivation, PacePreference, SocialLearning, TechComfort, TimePreference,
};

use super::{AnswerSet, QuestionSlot};

const DEFAULT_TECH_COMFORT: u8 = 2;
const DEFAULT_INTERFACE: u8 = 2;
const DEFAULT_LITERACY: u8 = 2;
const DEFAULT_ACCESSIBILITY: u8 = 4;
const DEFAULT_MOTIVATION: u8 = 1;
const DEFAULT_PACE: u8 = 2;
const DEFAULT_CHALLENGE: u8 = 2;
const DEFAULT_TIME: u8 = 2;

/// Interface/tech-comfort weight that selects the simple presentation.
const SIMPLE_THRESHOLD: u8 = 2;

/// Highest accessibility weight that forces the accessible presentation.
const ACCESSIBILITY_CEILING: u8 = 2;

// Threshold tables. Weights not listed fall through to the `otherwise` value
// passed alongside each table.

const TECH_COMFORT_TABLE: &[(u8, TechComfort)] =
    &[(1, TechComfort::Low), (2, TechComfort::Medium)];

const LITERACY_TABLE: &[(u8, LiteracyLevel)] =
    &[(1, LiteracyLevel::Basic), (2, LiteracyLevel::Medium)];

// Weights 1 and 2 both map to `visual`; `motor` is never produced.
const ACCESSIBILITY_TABLE: &[(u8, AccessibilityNeeds)] = &[
    (1, AccessibilityNeeds::Visual),
    (2, AccessibilityNeeds::Visual),
    (3, AccessibilityNeeds::Cognitive),
];

const MOTIVATION_TABLE: &[(u8, Motivation)] =
    &[(1, Motivation::Intrinsic), (2, Motivation::Extrinsic)];

const PACE_TABLE: &[(u8, PacePreference)] =
    &[(1, PacePreference::Fast), (2, PacePreference::Moderate)];

const CHALLENGE_TABLE: &[(u8, ChallengeLevel)] =
    &[(1, ChallengeLevel::Low), (2, ChallengeLevel::Medium)];

const TIME_TABLE: &[(u8, TimePreference)] =
    &[(1, TimePreference::Short), (2, TimePreference::Medium)];

/// Raw per-question weights after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub learning_style: Option<u8>,
    pub tech_comfort: u8,
    pub interface: u8,
    pub literacy: u8,
    pub accessibility: u8,
    pub motivation: u8,
    pub pace: u8,
    pub challenge: u8,
    pub time: u8,
}

impl ScoreCard {
    /// Reads every slot from `answers`, substituting defaults.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let or = |slot, default| answers.slot(slot).unwrap_or(default);
        Self {
            learning_style: answers.slot(QuestionSlot::LearningStyle),
            tech_comfort: or(QuestionSlot::TechComfort, DEFAULT_TECH_COMFORT),
            interface: or(QuestionSlot::InterfacePreference, DEFAULT_INTERFACE),
            literacy: or(QuestionSlot::ReadingPreference, DEFAULT_LITERACY),
            accessibility: or(QuestionSlot::AccessibilityNeeds, DEFAULT_ACCESSIBILITY),
            motivation: or(QuestionSlot::Motivation, DEFAULT_MOTIVATION),
            pace: or(QuestionSlot::Pace, DEFAULT_PACE),
            challenge: or(QuestionSlot::Challenge, DEFAULT_CHALLENGE),
            time: or(QuestionSlot::Time, DEFAULT_TIME),
        }
    }
}

fn accessibility_dominates(s: &ScoreCard) -> bool {
    s.accessibility <= ACCESSIBILITY_CEILING || s.literacy == 1 || s.tech_comfort == 1
}

fn prefers_simple(s: &ScoreCard) -> bool {
    s.interface == SIMPLE_THRESHOLD || s.tech_comfort == SIMPLE_THRESHOLD
}

/// Interface style priority list. Accessibility needs are checked first and
/// override any stylistic preference.
pub static INTERFACE_STYLE_RULES: RuleChain<ScoreCard, InterfaceStyle> = RuleChain::new(
    &[
        Rule {
            name: "accessibility",
            applies: accessibility_dominates,
            outcome: InterfaceStyle::Accessible,
        },
        Rule {
            name: "simple",
            applies: prefers_simple,
            outcome: InterfaceStyle::Simple,
        },
    ],
    InterfaceStyle::Premium,
);

/// Direct index-to-style mapping for the first answer.
///
/// Weights 1..=4 select visual, auditory, kinesthetic, reading. Anything
/// else (including no answer) resolves to `reading`.
pub fn learning_style_for(weight: Option<u8>) -> LearningStyle {
    match weight {
        Some(1) => LearningStyle::Visual,
        Some(2) => LearningStyle::Auditory,
        Some(3) => LearningStyle::Kinesthetic,
        _ => LearningStyle::Reading,
    }
}

/// Scores an answer set into a profile.
///
/// Pure and total: equal answer sets always yield equal profiles, and any
/// prefix of a full answer sequence scores without error.
pub fn score(answers: &AnswerSet) -> LearnerProfile {
    let card = ScoreCard::from_answers(answers);
    let interface = INTERFACE_STYLE_RULES.evaluate(&card);

    let profile = LearnerProfile {
        learning_style: learning_style_for(card.learning_style),
        motivation: threshold(card.motivation, MOTIVATION_TABLE, Motivation::Mixed),
        pace_preference: threshold(card.pace, PACE_TABLE, PacePreference::Slow),
        challenge_level: threshold(card.challenge, CHALLENGE_TABLE, ChallengeLevel::High),
        social_learning: SocialLearning::Individual,
        time_preference: threshold(card.time, TIME_TABLE, TimePreference::Long),
        tech_comfort: threshold(card.tech_comfort, TECH_COMFORT_TABLE, TechComfort::High),
        interface_style: interface.outcome,
        accessibility_needs: threshold(
            card.accessibility,
            ACCESSIBILITY_TABLE,
            AccessibilityNeeds::None,
        ),
        literacy_level: threshold(card.literacy, LITERACY_TABLE, LiteracyLevel::High),
    };

    tracing::debug!(
        answered = answers.len(),
        interface_rule = interface.rule.unwrap_or("fallback"),
        learning_style = %profile.learning_style,
        interface_style = %profile.interface_style,
        "Scored assessment"
    );

    profile
}
