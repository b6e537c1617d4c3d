//! Assessment module - questionnaire answers in, learner profile out.
//!
//! # Domain Invariants
//!
//! 1. Answers are appended in question-bank order and never edited
//! 2. An answer set never outnumbers the bank's questions
//! 3. Scoring is total over every prefix of the answer sequence
//! 4. Accessibility needs dominate stylistic interface preference

pub mod answers;
pub mod question;
pub mod scoring;
pub mod session;

pub use answers::AnswerSet;
pub use question::{AnswerOption, Question, QuestionSlot};
pub use scoring::{learning_style_for, score, ScoreCard, INTERFACE_STYLE_RULES};
pub use session::AssessmentSession;
