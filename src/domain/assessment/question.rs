//! Questionnaire types supplied by a question bank.

use serde::{Deserialize, Serialize};

/// A selectable answer carrying the weight fed to scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub label: String,
    pub weight: u8,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, weight: u8) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight,
        }
    }
}

/// One questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Finds an option by id.
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// True if `weight` is carried by at least one option.
    pub fn accepts_weight(&self, weight: u8) -> bool {
        self.options.iter().any(|o| o.weight == weight)
    }
}

/// Position of each scored question in the bank.
///
/// Scoring reads answers by position, so a bank must present its questions
/// in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSlot {
    LearningStyle = 0,
    TechComfort = 1,
    InterfacePreference = 2,
    ReadingPreference = 3,
    AccessibilityNeeds = 4,
    Motivation = 5,
    Pace = 6,
    Challenge = 7,
    Time = 8,
}

impl QuestionSlot {
    /// Number of scored questions.
    pub const COUNT: usize = 9;

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "pace-1",
            "When studying, you typically prefer to:",
            vec![
                AnswerOption::new("a", "Move quickly", 1),
                AnswerOption::new("b", "Steady pace", 2),
                AnswerOption::new("d", "It depends", 2),
            ],
        )
    }

    #[test]
    fn test_option_lookup() {
        let q = sample();
        assert_eq!(q.option("b").map(|o| o.weight), Some(2));
        assert!(q.option("z").is_none());
    }

    #[test]
    fn test_accepts_weight() {
        let q = sample();
        assert!(q.accepts_weight(1));
        assert!(q.accepts_weight(2));
        assert!(!q.accepts_weight(3));
    }

    #[test]
    fn test_slot_indices_follow_bank_order() {
        assert_eq!(QuestionSlot::LearningStyle.index(), 0);
        assert_eq!(QuestionSlot::AccessibilityNeeds.index(), 4);
        assert_eq!(QuestionSlot::Time.index(), QuestionSlot::COUNT - 1);
    }
}
