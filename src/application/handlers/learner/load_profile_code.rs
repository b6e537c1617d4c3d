//! LoadProfileCodeHandler - Command handler for restoring a profile from a shared code.

use crate::domain::codec::{decode, describe_profile, is_preset, ProfileCode};
use crate::domain::foundation::DomainError;
use crate::domain::learner::{ActiveProfile, LearnerProfile};

/// Command to load a profile code typed or pasted by the learner.
#[derive(Debug, Clone)]
pub struct LoadProfileCodeCommand {
    pub code: String,
}

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct LoadProfileCodeResult {
    pub profile: LearnerProfile,
    /// The code after normalization.
    pub code: ProfileCode,
    /// True when the code matched a hand-authored preset.
    pub preset: bool,
    pub description: String,
    pub previous: Option<LearnerProfile>,
}

/// Handler for loading profile codes.
#[derive(Debug, Default)]
pub struct LoadProfileCodeHandler;

impl LoadProfileCodeHandler {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes, decodes and activates a code.
    ///
    /// Surrounding whitespace is trimmed and letters are lowercased before
    /// decoding. A code that still does not decode is `InvalidProfileCode`
    /// and leaves the active profile untouched.
    pub fn handle(
        &self,
        cmd: LoadProfileCodeCommand,
        active: &mut ActiveProfile,
    ) -> Result<LoadProfileCodeResult, DomainError> {
        let normalized = normalize(&cmd.code);

        let profile = decode(&normalized).ok_or_else(|| {
            tracing::warn!(code = %cmd.code, "Rejected profile code");
            DomainError::invalid_profile_code(cmd.code.clone())
        })?;
        let preset = is_preset(&normalized);
        let code = ProfileCode::parse(normalized)?;

        let previous = active.replace(profile);
        tracing::info!(code = %code, preset, "Profile code loaded");

        Ok(LoadProfileCodeResult {
            profile,
            code,
            preset,
            description: describe_profile(&profile),
            previous,
        })
    }
}

/// Trims and ASCII-lowercases user input.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}
