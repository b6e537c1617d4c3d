//! GetAdaptedLessonHandler - Query handler for a lesson rendered for the active profile.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::adaptation::{
    button_variant_for, content_tier_for, language_style_for, ui_config_for, ButtonVariant,
    LanguageStyle, UiConfig,
};
use crate::domain::content::{ContentTier, LearningModule, Lesson, LessonKind};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::learner::ActiveProfile;
use crate::ports::ContentLibrary;

/// Query for one lesson.
#[derive(Debug, Clone)]
pub struct GetAdaptedLessonQuery {
    pub module_id: String,
    pub lesson_id: String,
}

/// A lesson with its text and presentation chosen for the learner.
#[derive(Debug, Clone, Serialize)]
pub struct AdaptedLesson {
    pub module_id: String,
    pub module_title: String,
    pub lesson_id: String,
    pub lesson_title: String,
    pub kind: LessonKind,
    /// 1-based position of the lesson in its module.
    pub position: usize,
    pub lesson_count: usize,
    pub tier: ContentTier,
    pub text: String,
    pub ui: UiConfig,
    pub button_variant: ButtonVariant,
    pub language: LanguageStyle,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub visual_aids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_script: Option<String>,
    pub conversational_enabled: bool,
}

/// Handler for adapted lesson lookups.
pub struct GetAdaptedLessonHandler {
    library: Arc<dyn ContentLibrary>,
}

impl GetAdaptedLessonHandler {
    pub fn new(library: Arc<dyn ContentLibrary>) -> Self {
        Self { library }
    }

    pub fn handle(
        &self,
        query: GetAdaptedLessonQuery,
        active: &ActiveProfile,
    ) -> Result<AdaptedLesson, DomainError> {
        let profile = active.require()?;
        let (module, lesson) =
            find_lesson(self.library.as_ref(), &query.module_id, &query.lesson_id)?;

        let tier = content_tier_for(profile);
        let text = match lesson.text_for(tier) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(
                    module = %module.id,
                    lesson = %lesson.id,
                    "Lesson has no text in any tier"
                );
                String::new()
            }
        };
        tracing::debug!(lesson = %lesson.id, tier = %tier, "Adapted lesson");

        Ok(AdaptedLesson {
            module_id: module.id.clone(),
            module_title: module.title.clone(),
            lesson_id: lesson.id.clone(),
            lesson_title: lesson.title.clone(),
            kind: lesson.kind,
            position: module.lesson_index(&lesson.id).map_or(1, |i| i + 1),
            lesson_count: module.lessons.len(),
            tier,
            text,
            ui: ui_config_for(profile),
            button_variant: button_variant_for(profile),
            language: language_style_for(profile),
            visual_aids: lesson.visual_aids.clone(),
            audio_script: lesson.audio_script.clone(),
            conversational_enabled: lesson.conversational_enabled,
        })
    }
}

/// Looks up a lesson, distinguishing a missing module from a missing lesson.
pub(crate) fn find_lesson<'a>(
    library: &'a dyn ContentLibrary,
    module_id: &str,
    lesson_id: &str,
) -> Result<(&'a LearningModule, &'a Lesson), DomainError> {
    let module = library.module(module_id).ok_or_else(|| {
        DomainError::new(ErrorCode::ModuleNotFound, "Learning module not found")
            .with_detail("module", module_id)
    })?;
    let lesson = module.lesson(lesson_id).ok_or_else(|| {
        DomainError::new(ErrorCode::LessonNotFound, "Lesson not found")
            .with_detail("module", module_id)
            .with_detail("lesson", lesson_id)
    })?;
    Ok((module, lesson))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::BuiltinContentLibrary;
    use crate::domain::adaptation::FontSize;
    use crate::domain::codec::decode;

    fn handler() -> GetAdaptedLessonHandler {
        GetAdaptedLessonHandler::new(Arc::new(BuiltinContentLibrary::new()))
    }

    fn query(module: &str, lesson: &str) -> GetAdaptedLessonQuery {
        GetAdaptedLessonQuery {
            module_id: module.to_string(),
            lesson_id: lesson.to_string(),
        }
    }

    fn active(code: &str) -> ActiveProfile {
        ActiveProfile::with_profile(decode(code).unwrap())
    }

    #[test]
    fn accessible_profile_gets_simple_text() {
        let lesson = handler()
            .handle(query("cardiovascular-health", "heart-anatomy"), &active("gentle-calm-garden"))
            .unwrap();

        assert_eq!(lesson.tier, ContentTier::Simple);
        assert!(lesson.text.starts_with("Your heart is like a pump."));
        assert_eq!(lesson.ui.font_size, FontSize::Xl);
        assert_eq!(lesson.button_variant, ButtonVariant::Outline);
        assert!(lesson.language.simple);
        assert_eq!(lesson.position, 1);
        assert_eq!(lesson.lesson_count, 3);
        assert_eq!(lesson.visual_aids.len(), 2);
    }

    #[test]
    fn premium_profile_gets_advanced_text() {
        let lesson = handler()
            .handle(query("nutrition-basics", "portion-control"), &active("bright-eagle-summit"))
            .unwrap();

        assert_eq!(lesson.tier, ContentTier::Advanced);
        assert!(lesson.text.starts_with("Implement evidence-based"));
        assert_eq!(lesson.position, 2);
        assert_eq!(lesson.kind, LessonKind::Interactive);
    }

    #[test]
    fn requires_active_profile() {
        let err = handler()
            .handle(query("nutrition-basics", "macronutrients"), &ActiveProfile::new())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveProfile);
    }

    #[test]
    fn unknown_module_and_lesson() {
        let active = active("wise-oak-bridge");
        let err = handler().handle(query("astronomy", "stars"), &active).unwrap_err();
        assert_eq!(err.code, ErrorCode::ModuleNotFound);

        let err = handler()
            .handle(query("nutrition-basics", "vitamins"), &active)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LessonNotFound);
        assert_eq!(err.details.get("lesson"), Some(&"vitamins".to_string()));
    }
}
