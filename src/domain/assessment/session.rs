//! AssessmentSession - walks a learner through the question bank.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::learner::LearnerProfile;
use crate::ports::QuestionBank;

use super::{score, AnswerSet, Question};

/// Progress through one sitting of the questionnaire.
///
/// Answers are append-only and can never outnumber the bank's questions.
/// The answer set lives only as long as the session: [`finish`](Self::finish)
/// consumes the session and hands back just the scored profile.
pub struct AssessmentSession {
    bank: Arc<dyn QuestionBank>,
    answers: AnswerSet,
}

impl AssessmentSession {
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self {
            bank,
            answers: AnswerSet::new(),
        }
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.answers.len())
    }

    /// 1-based position of the current question, clamped to the total.
    pub fn position(&self) -> usize {
        (self.answers.len() + 1).min(self.total())
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.total()
    }

    /// Completion percentage (0-100).
    pub fn percent_complete(&self) -> u8 {
        if self.total() == 0 {
            return 100;
        }
        ((self.answers.len() * 100) / self.total()) as u8
    }

    /// Records `weight` for the current question and advances.
    ///
    /// # Errors
    ///
    /// - `AssessmentComplete` if every question is already answered
    /// - `ValidationFailed` if no option of the current question carries `weight`
    pub fn answer(&mut self, weight: u8) -> Result<(), DomainError> {
        let question = self.current_question().ok_or_else(Self::complete_error)?;
        if !question.accepts_weight(weight) {
            return Err(DomainError::validation(
                "weight",
                format!("Weight {} is not an option of '{}'", weight, question.id),
            ));
        }
        self.answers.push(weight);
        Ok(())
    }

    /// Records the option with `option_id` for the current question.
    ///
    /// Returns the weight that was recorded.
    pub fn answer_option(&mut self, option_id: &str) -> Result<u8, DomainError> {
        let question = self.current_question().ok_or_else(Self::complete_error)?;
        let weight = question
            .option(option_id)
            .map(|o| o.weight)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::OptionNotFound, "Answer option not found")
                    .with_detail("question", question.id.clone())
                    .with_detail("option", option_id)
            })?;
        self.answers.push(weight);
        Ok(weight)
    }

    /// Scores the answers given so far without ending the session.
    pub fn preview(&self) -> LearnerProfile {
        score(&self.answers)
    }

    /// Clears all answers and returns to the first question.
    pub fn reset(&mut self) {
        self.answers = AnswerSet::new();
    }

    /// Scores the session and discards its answers.
    pub fn finish(self) -> LearnerProfile {
        let profile = score(&self.answers);
        tracing::debug!(
            answered = self.answers.len(),
            total = self.total(),
            "Assessment finished"
        );
        profile
    }

    fn complete_error() -> DomainError {
        DomainError::new(
            ErrorCode::AssessmentComplete,
            "All assessment questions have been answered",
        )
    }
}

impl std::fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("answered", &self.answers.len())
            .field("total", &self.total())
            .finish()
    }
}
