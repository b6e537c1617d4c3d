//! QuestionBank port - the ordered questionnaire the assessment walks.

use crate::domain::assessment::Question;

/// Supplies the assessment questions in scoring order.
///
/// Implementations must present questions in the order documented by
/// [`QuestionSlot`](crate::domain::assessment::QuestionSlot); scoring reads
/// answers by position.
pub trait QuestionBank: Send + Sync {
    /// All questions, in order.
    fn questions(&self) -> &[Question];

    fn len(&self) -> usize {
        self.questions().len()
    }

    fn is_empty(&self) -> bool {
        self.questions().is_empty()
    }

    /// Question at `index`, if any.
    fn get(&self, index: usize) -> Option<&Question> {
        self.questions().get(index)
    }
}
