//! Learner module - the profile every other subsystem reads.
//!
//! # Domain Invariants
//!
//! 1. Every profile field holds exactly one value from its closed enum
//! 2. The profile is a closed record; no extension fields
//! 3. A profile is replaced wholesale, never mutated field by field

pub mod active;
pub mod macros;
pub mod profile;

pub use active::ActiveProfile;
pub use profile::{
    AccessibilityNeeds, ChallengeLevel, InterfaceStyle, LearnerProfile, LearningStyle,
    LiteracyLevel, Motivation, PacePreference, SocialLearning, TechComfort, TimePreference,
};
