//! Learner profile command and query handlers.

mod list_presets;
mod load_profile_code;
mod score_assessment;

pub use list_presets::ListPresetsHandler;
pub use load_profile_code::{
    normalize, LoadProfileCodeCommand, LoadProfileCodeHandler, LoadProfileCodeResult,
};
pub use score_assessment::{
    ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult,
};
