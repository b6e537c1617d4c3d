//! Voice-tutor persona selection.
//!
//! The core only picks persona metadata; connecting to a speech service is
//! the host's job (see [`VoiceConfig`](crate::config::VoiceConfig) for the
//! persona to external agent id mapping).

use serde::Serialize;

use crate::domain::foundation::{Rule, RuleChain, RuleMatch};
use crate::domain::learner::{
    ChallengeLevel, LearnerProfile, LearningStyle, LiteracyLevel, Motivation,
};

crate::learner_enum! {
    /// Named persona bundle
    PersonaId {
        Simple => "simple",
        Anxious => "anxious",
        Visual => "visual",
        Advanced => "advanced",
        Standard => "standard",
    }
}

crate::learner_enum! {
    /// Conversational register
    VoiceStyle {
        Patient => "patient",
        Standard => "standard",
        Efficient => "efficient",
    }
}

crate::learner_enum! {
    /// Speaking pace
    VoicePace {
        Slow => "slow",
        Normal => "normal",
        Fast => "fast",
    }
}

crate::learner_enum! {
    /// How often the tutor offers positive reinforcement
    Encouragement {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

/// Persona metadata handed to the voice collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceAgentConfig {
    pub persona_id: PersonaId,
    pub style: VoiceStyle,
    pub pace: VoicePace,
    pub encouragement: Encouragement,
}

const SIMPLE_PERSONA: VoiceAgentConfig = VoiceAgentConfig {
    persona_id: PersonaId::Simple,
    style: VoiceStyle::Patient,
    pace: VoicePace::Slow,
    encouragement: Encouragement::High,
};

const ANXIOUS_PERSONA: VoiceAgentConfig = VoiceAgentConfig {
    persona_id: PersonaId::Anxious,
    style: VoiceStyle::Patient,
    pace: VoicePace::Normal,
    encouragement: Encouragement::High,
};

const VISUAL_PERSONA: VoiceAgentConfig = VoiceAgentConfig {
    persona_id: PersonaId::Visual,
    style: VoiceStyle::Standard,
    pace: VoicePace::Normal,
    encouragement: Encouragement::Medium,
};

const ADVANCED_PERSONA: VoiceAgentConfig = VoiceAgentConfig {
    persona_id: PersonaId::Advanced,
    style: VoiceStyle::Efficient,
    pace: VoicePace::Fast,
    encouragement: Encouragement::Low,
};

const STANDARD_PERSONA: VoiceAgentConfig = VoiceAgentConfig {
    persona_id: PersonaId::Standard,
    style: VoiceStyle::Standard,
    pace: VoicePace::Normal,
    encouragement: Encouragement::Medium,
};

fn needs_accessible_support(p: &LearnerProfile) -> bool {
    p.needs_accessible_presentation()
}

fn needs_encouragement(p: &LearnerProfile) -> bool {
    p.motivation == Motivation::Intrinsic || p.challenge_level == ChallengeLevel::Low
}

fn is_visual_learner(p: &LearnerProfile) -> bool {
    p.learning_style == LearningStyle::Visual
}

fn is_high_literacy(p: &LearnerProfile) -> bool {
    p.literacy_level == LiteracyLevel::High
}

/// Persona priority list, first match wins. Profiles routinely match more
/// than one rule, so the order here is part of the behaviour.
pub static VOICE_AGENT_RULES: RuleChain<LearnerProfile, VoiceAgentConfig> = RuleChain::new(
    &[
        Rule {
            name: "accessible-support",
            applies: needs_accessible_support,
            outcome: SIMPLE_PERSONA,
        },
        Rule {
            name: "encouraging",
            applies: needs_encouragement,
            outcome: ANXIOUS_PERSONA,
        },
        Rule {
            name: "visual",
            applies: is_visual_learner,
            outcome: VISUAL_PERSONA,
        },
        Rule {
            name: "advanced",
            applies: is_high_literacy,
            outcome: ADVANCED_PERSONA,
        },
    ],
    STANDARD_PERSONA,
);

/// Voice persona for `profile`.
pub fn voice_agent_for(profile: &LearnerProfile) -> VoiceAgentConfig {
    voice_agent_match(profile).outcome
}

/// Like [`voice_agent_for`] but also reports which rule fired.
pub fn voice_agent_match(profile: &LearnerProfile) -> RuleMatch<VoiceAgentConfig> {
    let m = VOICE_AGENT_RULES.evaluate(profile);
    tracing::debug!(
        rule = m.rule.unwrap_or("fallback"),
        persona = %m.outcome.persona_id,
        "Selected voice persona"
    );
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::profile::fixtures::premium_profile;
    use crate::domain::learner::InterfaceStyle;

    // premium_profile: kinesthetic, extrinsic, high challenge, high literacy, premium.

    #[test]
    fn basic_literacy_gets_patient_slow_persona() {
        let mut p = premium_profile();
        p.literacy_level = LiteracyLevel::Basic;
        assert_eq!(voice_agent_for(&p), SIMPLE_PERSONA);
    }

    #[test]
    fn accessible_interface_beats_intrinsic_motivation() {
        let mut p = premium_profile();
        p.interface_style = InterfaceStyle::Accessible;
        p.motivation = Motivation::Intrinsic;
        let m = voice_agent_match(&p);
        assert_eq!(m.rule, Some("accessible-support"));
        assert_eq!(m.outcome.pace, VoicePace::Slow);
    }

    #[test]
    fn intrinsic_motivation_gets_encouraging_persona() {
        let mut p = premium_profile();
        p.motivation = Motivation::Intrinsic;
        let config = voice_agent_for(&p);
        assert_eq!(config.persona_id, PersonaId::Anxious);
        assert_eq!(config.style, VoiceStyle::Patient);
        assert_eq!(config.pace, VoicePace::Normal);
        assert_eq!(config.encouragement, Encouragement::High);
    }

    #[test]
    fn low_challenge_gets_encouraging_persona_even_when_visual() {
        let mut p = premium_profile();
        p.challenge_level = ChallengeLevel::Low;
        p.learning_style = LearningStyle::Visual;
        assert_eq!(voice_agent_for(&p).persona_id, PersonaId::Anxious);
    }

    #[test]
    fn visual_learner_beats_high_literacy() {
        let mut p = premium_profile();
        p.learning_style = LearningStyle::Visual;
        assert_eq!(voice_agent_for(&p), VISUAL_PERSONA);
    }

    #[test]
    fn high_literacy_gets_efficient_persona() {
        assert_eq!(voice_agent_for(&premium_profile()), ADVANCED_PERSONA);
    }

    #[test]
    fn fallback_is_standard_persona() {
        let mut p = premium_profile();
        p.literacy_level = LiteracyLevel::Medium;
        let m = voice_agent_match(&p);
        assert_eq!(m.rule, None);
        assert_eq!(m.outcome, STANDARD_PERSONA);
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = VOICE_AGENT_RULES.rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["accessible-support", "encouraging", "visual", "advanced"]
        );
    }

    #[test]
    fn every_profile_gets_a_persona() {
        for profile in LearnerProfile::all() {
            let config = VOICE_AGENT_RULES.outcome(&profile);
            if profile.needs_accessible_presentation() {
                assert_eq!(config.persona_id, PersonaId::Simple);
            }
        }
    }
}
