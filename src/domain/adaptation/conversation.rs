//! System prompt composition for the conversational tutor.

use crate::domain::learner::{LearnerProfile, LearningStyle};

use super::voice_agent::{voice_agent_for, Encouragement, VoiceStyle};

const PATIENT_CLAUSE: &str =
    " Speak slowly and encouragingly. Break down complex concepts into simple terms.";
const EFFICIENT_CLAUSE: &str =
    " Be direct and comprehensive. Use advanced terminology when appropriate.";
const ENCOURAGEMENT_CLAUSE: &str =
    " Provide frequent positive reinforcement and check for understanding.";
const VISUAL_CLAUSE: &str =
    " Describe visual elements and suggest imagining scenarios to help with comprehension.";

fn style_clause(style: VoiceStyle) -> Option<&'static str> {
    match style {
        VoiceStyle::Patient => Some(PATIENT_CLAUSE),
        VoiceStyle::Efficient => Some(EFFICIENT_CLAUSE),
        VoiceStyle::Standard => None,
    }
}

/// Builds the tutor's system prompt for one lesson.
///
/// Clause order is fixed: role, persona style, encouragement, visual
/// guidance, then the lesson text verbatim. A profile only decides which
/// clauses are included, never their order.
pub fn conversational_context(
    module_title: &str,
    lesson_title: &str,
    lesson_text: &str,
    profile: &LearnerProfile,
) -> String {
    let agent = voice_agent_for(profile);

    let mut context = format!(
        "You are a health education tutor helping with the module \"{}\", specifically the lesson \"{}\".",
        module_title, lesson_title
    );

    if let Some(clause) = style_clause(agent.style) {
        context.push_str(clause);
    }

    if agent.encouragement == Encouragement::High {
        context.push_str(ENCOURAGEMENT_CLAUSE);
    }

    if profile.learning_style == LearningStyle::Visual {
        context.push_str(VISUAL_CLAUSE);
    }

    context.push_str("\n\nLesson content to cover:\n");
    context.push_str(lesson_text);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::profile::fixtures::premium_profile;
    use crate::domain::learner::{LiteracyLevel, Motivation};

    const MODULE: &str = "Heart Health Basics";
    const LESSON: &str = "How Your Heart Works";
    const TEXT: &str = "The heart is a muscular pump.";

    #[test]
    fn role_statement_names_module_and_lesson() {
        let ctx = conversational_context(MODULE, LESSON, TEXT, &premium_profile());
        assert!(ctx.starts_with(
            "You are a health education tutor helping with the module \"Heart Health Basics\", specifically the lesson \"How Your Heart Works\"."
        ));
    }

    #[test]
    fn lesson_text_is_appended_verbatim_at_end() {
        let ctx = conversational_context(MODULE, LESSON, TEXT, &premium_profile());
        assert!(ctx.ends_with("\n\nLesson content to cover:\nThe heart is a muscular pump."));
    }

    #[test]
    fn efficient_persona_gets_efficient_clause_only() {
        // High literacy premium kinesthetic: efficient, low encouragement.
        let ctx = conversational_context(MODULE, LESSON, TEXT, &premium_profile());
        assert!(ctx.contains(EFFICIENT_CLAUSE));
        assert!(!ctx.contains(PATIENT_CLAUSE));
        assert!(!ctx.contains(ENCOURAGEMENT_CLAUSE));
        assert!(!ctx.contains(VISUAL_CLAUSE));
    }

    #[test]
    fn patient_persona_gets_patient_and_encouragement_in_order() {
        let mut p = premium_profile();
        p.literacy_level = LiteracyLevel::Basic;
        p.learning_style = LearningStyle::Visual;
        let ctx = conversational_context(MODULE, LESSON, TEXT, &p);

        let patient = ctx.find(PATIENT_CLAUSE).unwrap();
        let encouragement = ctx.find(ENCOURAGEMENT_CLAUSE).unwrap();
        let visual = ctx.find(VISUAL_CLAUSE).unwrap();
        let lesson = ctx.find("Lesson content to cover:").unwrap();
        assert!(patient < encouragement);
        assert!(encouragement < visual);
        assert!(visual < lesson);
    }

    #[test]
    fn standard_persona_adds_no_style_clause() {
        let mut p = premium_profile();
        p.learning_style = LearningStyle::Visual;
        let ctx = conversational_context(MODULE, LESSON, TEXT, &p);
        assert!(!ctx.contains(PATIENT_CLAUSE));
        assert!(!ctx.contains(EFFICIENT_CLAUSE));
        assert!(ctx.contains(VISUAL_CLAUSE));
    }

    #[test]
    fn exact_prompt_for_encouraging_persona() {
        let mut p = premium_profile();
        p.motivation = Motivation::Intrinsic;
        let ctx = conversational_context("M", "L", "Body", &p);
        assert_eq!(
            ctx,
            "You are a health education tutor helping with the module \"M\", specifically the lesson \"L\". Speak slowly and encouragingly. Break down complex concepts into simple terms. Provide frequent positive reinforcement and check for understanding.\n\nLesson content to cover:\nBody"
        );
    }
}
