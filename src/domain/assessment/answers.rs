//! AnswerSet - the transient, append-only list of answer weights.

use serde::{Deserialize, Serialize};

use super::QuestionSlot;

/// Ordered answer weights, one per answered question, in bank order.
///
/// A weight of `0` is never a valid option weight and reads back as
/// unanswered, so scoring applies that field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    weights: Vec<u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the weight for the next question.
    pub fn push(&mut self, weight: u8) {
        self.weights.push(weight);
    }

    /// Weight answered at `index`, or `None` if unanswered.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.weights.get(index).copied().filter(|w| *w != 0)
    }

    /// Weight answered for a scored slot.
    pub fn slot(&self, slot: QuestionSlot) -> Option<u8> {
        self.get(slot.index())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.weights
    }
}

impl From<Vec<u8>> for AnswerSet {
    fn from(weights: Vec<u8>) -> Self {
        Self { weights }
    }
}

impl From<&[u8]> for AnswerSet {
    fn from(weights: &[u8]) -> Self {
        Self {
            weights: weights.to_vec(),
        }
    }
}

impl FromIterator<u8> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_in_order() {
        let mut answers = AnswerSet::new();
        answers.push(3);
        answers.push(1);
        assert_eq!(answers.as_slice(), &[3, 1]);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_get_beyond_answered_is_none() {
        let answers = AnswerSet::from(vec![1, 2]);
        assert_eq!(answers.get(1), Some(2));
        assert_eq!(answers.get(2), None);
    }

    #[test]
    fn test_zero_weight_reads_as_unanswered() {
        let answers = AnswerSet::from(vec![0, 2]);
        assert_eq!(answers.get(0), None);
        assert_eq!(answers.slot(QuestionSlot::TechComfort), Some(2));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let answers: AnswerSet = [1u8, 3, 2].into_iter().collect();
        assert_eq!(serde_json::to_string(&answers).unwrap(), "[1,3,2]");
    }
}
