//! Adaptation engine - pure functions from a profile to presentation.
//!
//! | Function | Output | Keyed on |
//! |----------|--------|----------|
//! | [`ui_config_for`] | sizes, contrast, motion | `interface_style` only |
//! | [`content_tier_for`] | simple / standard / advanced | literacy, interface |
//! | [`voice_agent_for`] | persona metadata | ordered rule list |
//! | [`conversational_context`] | tutor system prompt | persona + learning style |
//! | [`learning_paths_for`] | dashboard path list | time, challenge |
//!
//! Every function is total over the full profile domain and deterministic.
//! Results are recomputed from the profile on demand and never cached
//! alongside it.

pub mod content;
pub mod conversation;
pub mod learning_path;
pub mod ui_config;
pub mod voice_agent;

pub use content::{adapted_text, content_tier_for, language_style_for, LanguageStyle};
pub use conversation::conversational_context;
pub use learning_path::{learning_paths_for, LearningPath, PathStatus};
pub use ui_config::{
    button_variant_for, ui_config_for, AnimationLevel, ButtonSize, ButtonVariant, Complexity,
    Contrast, FontSize, Spacing, UiConfig,
};
pub use voice_agent::{
    voice_agent_for, voice_agent_match, Encouragement, PersonaId, VoiceAgentConfig, VoicePace,
    VoiceStyle, VOICE_AGENT_RULES,
};
