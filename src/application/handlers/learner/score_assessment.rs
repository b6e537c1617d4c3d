//! ScoreAssessmentHandler - Command handler for scoring a completed questionnaire.

use std::sync::Arc;

use crate::domain::assessment::{score, AnswerSet};
use crate::domain::codec::{describe_profile, encode, ProfileCode};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::learner::{ActiveProfile, LearnerProfile};
use crate::ports::QuestionBank;

/// Command to score a set of answers.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    pub answers: AnswerSet,
}

/// Result of a successful scoring.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentResult {
    pub profile: LearnerProfile,
    pub code: ProfileCode,
    pub description: String,
    /// Profile that was active before this one, if any.
    pub previous: Option<LearnerProfile>,
}

/// Handler for scoring assessments.
pub struct ScoreAssessmentHandler {
    bank: Arc<dyn QuestionBank>,
}

impl ScoreAssessmentHandler {
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self { bank }
    }

    /// Scores the answers and makes the result the active profile.
    ///
    /// Answers are checked against the bank: there may be no more answers
    /// than questions, and every non-zero weight must belong to an option of
    /// its question. A zero weight is a skipped question and scores as the
    /// field's default.
    pub fn handle(
        &self,
        cmd: ScoreAssessmentCommand,
        active: &mut ActiveProfile,
    ) -> Result<ScoreAssessmentResult, DomainError> {
        // 1. Validate against the bank
        if cmd.answers.len() > self.bank.len() {
            return Err(ValidationError::out_of_range(
                "answers",
                0,
                self.bank.len() as i32,
                cmd.answers.len() as i32,
            )
            .into());
        }
        for (index, weight) in cmd.answers.as_slice().iter().enumerate() {
            let accepted = *weight == 0
                || self
                    .bank
                    .get(index)
                    .map(|q| q.accepts_weight(*weight))
                    .unwrap_or(false);
            if !accepted {
                return Err(DomainError::validation(
                    "answers",
                    format!("Answer {} has no option with weight {}", index + 1, weight),
                ));
            }
        }

        // 2. Score and encode
        let profile = score(&cmd.answers);
        let code = encode(&profile);

        // 3. Replace the active profile
        let previous = active.replace(profile);
        tracing::info!(code = %code, "Assessment scored");

        Ok(ScoreAssessmentResult {
            profile,
            description: describe_profile(&profile),
            code,
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::question_bank::BuiltinQuestionBank;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::learner::{InterfaceStyle, LearningStyle, LiteracyLevel};

    fn handler() -> ScoreAssessmentHandler {
        ScoreAssessmentHandler::new(Arc::new(BuiltinQuestionBank::new()))
    }

    fn cmd(answers: &[u8]) -> ScoreAssessmentCommand {
        ScoreAssessmentCommand {
            answers: AnswerSet::from(answers),
        }
    }

    #[test]
    fn scores_and_activates_profile() {
        let mut active = ActiveProfile::new();
        let result = handler()
            .handle(cmd(&[1, 3, 2, 1, 4, 1, 2, 2, 2]), &mut active)
            .unwrap();

        assert_eq!(result.profile.learning_style, LearningStyle::Visual);
        assert_eq!(result.profile.interface_style, InterfaceStyle::Accessible);
        assert_eq!(result.profile.literacy_level, LiteracyLevel::Basic);
        assert_eq!(result.code.as_str(), "bright-gentle-bridge");
        assert_eq!(
            result.description,
            "visual learner with accessible design and balanced approach"
        );
        assert!(result.previous.is_none());
        assert_eq!(active.current(), Some(&result.profile));
    }

    #[test]
    fn rescoring_returns_previous_profile() {
        let mut active = ActiveProfile::new();
        let first = handler().handle(cmd(&[4, 3, 3, 3, 4, 3, 2, 3, 3]), &mut active).unwrap();
        let second = handler().handle(cmd(&[1, 1]), &mut active).unwrap();

        assert_eq!(second.previous, Some(first.profile));
        assert_eq!(active.current(), Some(&second.profile));
    }

    #[test]
    fn empty_answers_score_defaults() {
        let mut active = ActiveProfile::new();
        let result = handler().handle(cmd(&[]), &mut active).unwrap();
        assert_eq!(result.profile.learning_style, LearningStyle::Reading);
        assert_eq!(result.profile.interface_style, InterfaceStyle::Simple);
    }

    #[test]
    fn zero_counts_as_skipped() {
        let mut active = ActiveProfile::new();
        assert!(handler().handle(cmd(&[0, 0, 3]), &mut active).is_ok());
    }

    #[test]
    fn weight_not_on_question_is_rejected() {
        let mut active = ActiveProfile::new();
        // Tech comfort only offers 1..=3.
        let err = handler().handle(cmd(&[1, 4]), &mut active).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(!active.is_set());
    }

    #[test]
    fn too_many_answers_rejected() {
        let mut active = ActiveProfile::new();
        let err = handler()
            .handle(cmd(&[1, 3, 2, 1, 4, 1, 2, 2, 2, 1]), &mut active)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"answers".to_string()));
    }
}
