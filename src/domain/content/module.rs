//! Learning modules, lessons and quiz questions.

use serde::{Deserialize, Serialize};

use super::{ContentTier, TieredText};

/// How a lesson is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonKind {
    Text,
    Video,
    Interactive,
    Quiz,
    Conversational,
}

impl Default for LessonKind {
    fn default() -> Self {
        Self::Text
    }
}

/// One lesson with its tiered body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: LessonKind,
    pub content: TieredText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visual_aids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_script: Option<String>,
    /// Whether the conversational tutor can be opened on this lesson.
    #[serde(default)]
    pub conversational_enabled: bool,
}

impl Lesson {
    /// Lesson body for `tier`, falling back through the other tiers.
    pub fn text_for(&self, tier: ContentTier) -> Option<&str> {
        self.content.resolve(tier)
    }
}

/// One answer choice on a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: TieredText,
    pub correct: bool,
    pub explanation: TieredText,
}

/// Outcome of checking a quiz answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizFeedback {
    pub correct: bool,
    pub explanation: String,
}

/// A multiple-choice question with tiered wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: TieredText,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Checks `option_id`, returning the explanation at `tier`.
    ///
    /// `None` when the question has no such option.
    pub fn check(&self, option_id: &str, tier: ContentTier) -> Option<QuizFeedback> {
        let option = self.options.iter().find(|o| o.id == option_id)?;
        Some(QuizFeedback {
            correct: option.correct,
            explanation: option.explanation.resolve(tier).unwrap_or_default().to_string(),
        })
    }

    /// Id of the first correct option.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.iter().find(|o| o.correct).map(|o| o.id.as_str())
    }
}

/// A themed group of lessons plus its end-of-module quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display duration, e.g. "25 min".
    pub duration: String,
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
}

impl LearningModule {
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn lesson_index(&self, lesson_id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == lesson_id)
    }

    pub fn quiz_question(&self, question_id: &str) -> Option<&QuizQuestion> {
        self.quiz_questions.iter().find(|q| q.id == question_id)
    }
}
