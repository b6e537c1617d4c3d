//! LearnerProfile value object and its field enums

use serde::{Deserialize, Serialize};

crate::learner_enum! {
    /// Dominant sensory channel for taking in new material
    LearningStyle {
        Visual => "visual",
        Auditory => "auditory",
        Kinesthetic => "kinesthetic",
        Reading => "reading",
    }
}

crate::learner_enum! {
    /// What drives the learner to engage
    Motivation {
        Intrinsic => "intrinsic",
        Extrinsic => "extrinsic",
        Mixed => "mixed",
    }
}

crate::learner_enum! {
    /// Preferred pace through material
    PacePreference {
        Fast => "fast",
        Moderate => "moderate",
        Slow => "slow",
    }
}

crate::learner_enum! {
    /// Appetite for difficult material
    ChallengeLevel {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

crate::learner_enum! {
    /// Solo versus group learning
    SocialLearning {
        Individual => "individual",
        Group => "group",
        Mixed => "mixed",
    }
}

crate::learner_enum! {
    /// Typical session length
    TimePreference {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
}

crate::learner_enum! {
    /// Comfort with apps and technology
    TechComfort {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

crate::learner_enum! {
    /// Presentation family the UI renders in
    InterfaceStyle {
        Premium => "premium",
        Simple => "simple",
        Accessible => "accessible",
    }
}

crate::learner_enum! {
    /// Declared accessibility need
    AccessibilityNeeds {
        None => "none",
        Visual => "visual",
        Cognitive => "cognitive",
        Motor => "motor",
    }
}

crate::learner_enum! {
    /// Vocabulary level the learner is comfortable with
    LiteracyLevel {
        High => "high",
        Medium => "medium",
        Basic => "basic",
    }
}

/// The ten-field learner profile.
///
/// A closed record: every field always holds exactly one value and there are
/// no optional or extension fields. Profiles are produced by scoring or by
/// decoding a profile code and are never mutated field-wise afterwards; a new
/// profile replaces the old one wholesale (see [`super::ActiveProfile`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LearnerProfile {
    pub learning_style: LearningStyle,
    pub motivation: Motivation,
    pub pace_preference: PacePreference,
    pub challenge_level: ChallengeLevel,
    pub social_learning: SocialLearning,
    pub time_preference: TimePreference,
    pub tech_comfort: TechComfort,
    pub interface_style: InterfaceStyle,
    pub accessibility_needs: AccessibilityNeeds,
    pub literacy_level: LiteracyLevel,
}

impl LearnerProfile {
    /// Enumerates every profile in the finite ten-field domain.
    ///
    /// 4 * 3^8 * 4 = 104,976 profiles. Intended for exhaustive tests of the
    /// adaptation engine.
    pub fn all() -> impl Iterator<Item = LearnerProfile> {
        LearningStyle::ALL.iter().flat_map(move |&learning_style| {
            Motivation::ALL.iter().flat_map(move |&motivation| {
                PacePreference::ALL.iter().flat_map(move |&pace_preference| {
                    ChallengeLevel::ALL.iter().flat_map(move |&challenge_level| {
                        SocialLearning::ALL.iter().flat_map(move |&social_learning| {
                            TimePreference::ALL.iter().flat_map(move |&time_preference| {
                                TechComfort::ALL.iter().flat_map(move |&tech_comfort| {
                                    InterfaceStyle::ALL.iter().flat_map(move |&interface_style| {
                                        AccessibilityNeeds::ALL.iter().flat_map(
                                            move |&accessibility_needs| {
                                                LiteracyLevel::ALL.iter().map(
                                                    move |&literacy_level| LearnerProfile {
                                                        learning_style,
                                                        motivation,
                                                        pace_preference,
                                                        challenge_level,
                                                        social_learning,
                                                        time_preference,
                                                        tech_comfort,
                                                        interface_style,
                                                        accessibility_needs,
                                                        literacy_level,
                                                    },
                                                )
                                            },
                                        )
                                    })
                                })
                            })
                        })
                    })
                })
            })
        })
    }

    /// True when the learner should get the accessible presentation family.
    pub fn needs_accessible_presentation(&self) -> bool {
        self.literacy_level == LiteracyLevel::Basic
            || self.interface_style == InterfaceStyle::Accessible
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A dense, high-literacy profile.
    pub fn premium_profile() -> LearnerProfile {
        LearnerProfile {
            learning_style: LearningStyle::Kinesthetic,
            motivation: Motivation::Extrinsic,
            pace_preference: PacePreference::Fast,
            challenge_level: ChallengeLevel::High,
            social_learning: SocialLearning::Individual,
            time_preference: TimePreference::Long,
            tech_comfort: TechComfort::High,
            interface_style: InterfaceStyle::Premium,
            accessibility_needs: AccessibilityNeeds::None,
            literacy_level: LiteracyLevel::High,
        }
    }
}
