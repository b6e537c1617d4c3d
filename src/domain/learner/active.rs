//! ActiveProfile - the session's single source of truth for the learner.

use super::LearnerProfile;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Holds the profile currently driving presentation for a session.
///
/// The profile is only ever replaced as a whole value; there are no field
/// setters. Derived configuration (UI, voice, content tier) is recomputed from
/// whatever [`current`](Self::current) returns and is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveProfile {
    current: Option<LearnerProfile>,
}

impl ActiveProfile {
    /// Creates an empty holder (no assessment taken, no code loaded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a holder that starts with `profile`.
    pub fn with_profile(profile: LearnerProfile) -> Self {
        Self {
            current: Some(profile),
        }
    }

    /// The profile in effect, if any.
    pub fn current(&self) -> Option<&LearnerProfile> {
        self.current.as_ref()
    }

    /// The profile in effect.
    ///
    /// # Errors
    ///
    /// `NoActiveProfile` before an assessment has been scored or a code loaded.
    pub fn require(&self) -> Result<&LearnerProfile, DomainError> {
        self.current.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::NoActiveProfile,
                "Take the assessment or load a profile code first",
            )
        })
    }

    /// Swaps in a new profile, returning the one it replaced.
    pub fn replace(&mut self, profile: LearnerProfile) -> Option<LearnerProfile> {
        self.current.replace(profile)
    }

    /// Drops the active profile, e.g. when the learner retakes the assessment.
    pub fn clear(&mut self) -> Option<LearnerProfile> {
        self.current.take()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}
