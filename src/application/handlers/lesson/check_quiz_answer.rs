//! CheckQuizAnswerHandler - Query handler for grading one quiz answer.

use std::sync::Arc;

use crate::domain::adaptation::content_tier_for;
use crate::domain::content::QuizFeedback;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::learner::ActiveProfile;
use crate::ports::ContentLibrary;

/// Query grading `option_id` on one quiz question.
#[derive(Debug, Clone)]
pub struct CheckQuizAnswerQuery {
    pub module_id: String,
    pub question_id: String,
    pub option_id: String,
}

/// Handler for quiz grading; explanations come back at the learner's tier.
pub struct CheckQuizAnswerHandler {
    library: Arc<dyn ContentLibrary>,
}

impl CheckQuizAnswerHandler {
    pub fn new(library: Arc<dyn ContentLibrary>) -> Self {
        Self { library }
    }

    pub fn handle(
        &self,
        query: CheckQuizAnswerQuery,
        active: &ActiveProfile,
    ) -> Result<QuizFeedback, DomainError> {
        let profile = active.require()?;
        let module = self.library.module(&query.module_id).ok_or_else(|| {
            DomainError::new(ErrorCode::ModuleNotFound, "Learning module not found")
                .with_detail("module", query.module_id.clone())
        })?;
        let question = module.quiz_question(&query.question_id).ok_or_else(|| {
            DomainError::new(ErrorCode::QuizQuestionNotFound, "Quiz question not found")
                .with_detail("module", query.module_id.clone())
                .with_detail("question", query.question_id.clone())
        })?;

        question
            .check(&query.option_id, content_tier_for(profile))
            .ok_or_else(|| {
                DomainError::new(ErrorCode::OptionNotFound, "Answer option not found")
                    .with_detail("question", query.question_id.clone())
                    .with_detail("option", query.option_id.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::BuiltinContentLibrary;
    use crate::domain::codec::decode;

    fn check(code: &str, question: &str, option: &str) -> Result<QuizFeedback, DomainError> {
        CheckQuizAnswerHandler::new(Arc::new(BuiltinContentLibrary::new())).handle(
            CheckQuizAnswerQuery {
                module_id: "cardiovascular-health".to_string(),
                question_id: question.to_string(),
                option_id: option.to_string(),
            },
            &ActiveProfile::with_profile(decode(code).unwrap()),
        )
    }

    #[test]
    fn correct_answer_at_learner_tier() {
        let feedback = check("wise-oak-bridge", "q1", "a").unwrap();
        assert!(feedback.correct);
        assert!(feedback.explanation.starts_with("Correct! The heart's main job"));
    }

    #[test]
    fn wrong_answer_at_simple_tier() {
        let feedback = check("gentle-calm-garden", "q1", "b").unwrap();
        assert!(!feedback.correct);
        assert_eq!(
            feedback.explanation,
            "Not quite. Your lungs help you breathe. Your heart pumps blood."
        );
    }

    #[test]
    fn unknown_question_and_option() {
        assert_eq!(
            check("wise-oak-bridge", "q9", "a").unwrap_err().code,
            ErrorCode::QuizQuestionNotFound
        );
        let err = check("wise-oak-bridge", "q1", "e").unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
        assert!(err.is_user_correctable());
    }
}
