//! GetTutorContextHandler - Query handler for the conversational tutor setup.

use std::sync::Arc;

use serde::Serialize;

use crate::config::VoiceConfig;
use crate::domain::adaptation::{
    content_tier_for, conversational_context, voice_agent_match, VoiceAgentConfig,
};
use crate::domain::foundation::DomainError;
use crate::domain::learner::ActiveProfile;
use crate::ports::ContentLibrary;

use super::get_adapted_lesson::find_lesson;

/// Query for the tutor on one lesson.
#[derive(Debug, Clone)]
pub struct GetTutorContextQuery {
    pub module_id: String,
    pub lesson_id: String,
}

/// Everything the voice collaborator needs to start a tutoring session.
#[derive(Debug, Clone, Serialize)]
pub struct TutorContext {
    pub agent_id: String,
    pub persona: VoiceAgentConfig,
    /// Name of the persona rule that fired; `None` for the standard fallback.
    pub rule: Option<&'static str>,
    pub context: String,
}

/// Handler for tutor context lookups.
pub struct GetTutorContextHandler {
    library: Arc<dyn ContentLibrary>,
    voice: VoiceConfig,
}

impl GetTutorContextHandler {
    pub fn new(library: Arc<dyn ContentLibrary>, voice: VoiceConfig) -> Self {
        Self { library, voice }
    }

    /// # Errors
    ///
    /// - `NoActiveProfile` without a profile
    /// - `ModuleNotFound` / `LessonNotFound` for unknown ids
    /// - `ValidationFailed` if the lesson does not offer the tutor
    pub fn handle(
        &self,
        query: GetTutorContextQuery,
        active: &ActiveProfile,
    ) -> Result<TutorContext, DomainError> {
        let profile = active.require()?;
        let (module, lesson) =
            find_lesson(self.library.as_ref(), &query.module_id, &query.lesson_id)?;

        if !lesson.conversational_enabled {
            return Err(DomainError::validation(
                "lesson",
                format!("Lesson '{}' does not offer the conversational tutor", lesson.id),
            ));
        }

        let matched = voice_agent_match(profile);
        let text = lesson.text_for(content_tier_for(profile)).unwrap_or_default();

        Ok(TutorContext {
            agent_id: self.voice.agent_id_for(matched.outcome.persona_id).to_string(),
            persona: matched.outcome,
            rule: matched.rule,
            context: conversational_context(&module.title, &lesson.title, text, profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::{BuiltinContentLibrary, YamlContentLibrary};
    use crate::config::DEFAULT_AGENT_ID;
    use crate::domain::adaptation::{PersonaId, VoiceStyle};
    use crate::domain::codec::decode;
    use crate::domain::foundation::ErrorCode;

    fn query(module: &str, lesson: &str) -> GetTutorContextQuery {
        GetTutorContextQuery {
            module_id: module.to_string(),
            lesson_id: lesson.to_string(),
        }
    }

    fn active(code: &str) -> ActiveProfile {
        ActiveProfile::with_profile(decode(code).unwrap())
    }

    #[test]
    fn accessible_profile_gets_patient_simple_persona() {
        let handler = GetTutorContextHandler::new(
            Arc::new(BuiltinContentLibrary::new()),
            VoiceConfig::default(),
        );
        let tutor = handler
            .handle(query("cardiovascular-health", "blood-pressure-basics"), &active("gentle-calm-garden"))
            .unwrap();

        assert_eq!(tutor.persona.persona_id, PersonaId::Simple);
        assert_eq!(tutor.persona.style, VoiceStyle::Patient);
        assert_eq!(tutor.rule, Some("accessible-support"));
        assert_eq!(tutor.agent_id, DEFAULT_AGENT_ID);
        assert!(tutor
            .context
            .starts_with("You are a health education tutor helping with the module \"Heart Health Basics\""));
        assert!(tutor
            .context
            .ends_with("Lesson content to cover:\nBlood pressure is how hard your blood pushes against your blood vessel walls. Normal is usually around 120/80."));
    }

    #[test]
    fn persona_override_from_config() {
        let mut voice = VoiceConfig::default();
        voice
            .agents
            .insert("simple".to_string(), "agent_plain_language".to_string());
        let handler = GetTutorContextHandler::new(Arc::new(BuiltinContentLibrary::new()), voice);

        let tutor = handler
            .handle(query("nutrition-basics", "macronutrients"), &active("gentle-calm-garden"))
            .unwrap();
        assert_eq!(tutor.agent_id, "agent_plain_language");
    }

    #[test]
    fn lesson_without_tutor_is_rejected() {
        let yaml = r#"
modules:
  - id: m
    title: M
    description: d
    duration: 5 min
    lessons:
      - { id: quiet, title: Quiet, content: { standard: Read only. } }
"#;
        let library = YamlContentLibrary::parse(yaml, "inline.yaml").unwrap();
        let handler = GetTutorContextHandler::new(Arc::new(library), VoiceConfig::default());

        let err = handler.handle(query("m", "quiet"), &active("wise-oak-bridge")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn requires_active_profile() {
        let handler = GetTutorContextHandler::new(
            Arc::new(BuiltinContentLibrary::new()),
            VoiceConfig::default(),
        );
        let err = handler
            .handle(query("nutrition-basics", "macronutrients"), &ActiveProfile::new())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveProfile);
    }
}
