//! Content module - tiered lesson and quiz text.
//!
//! The library itself is external data reached through the
//! [`ContentLibrary`](crate::ports::ContentLibrary) port. This module defines
//! its shape, the tier fallback rules and per-module lesson progress.

pub mod module;
pub mod progress;
pub mod tier;

pub use module::{LearningModule, Lesson, LessonKind, QuizFeedback, QuizOption, QuizQuestion};
pub use progress::ModuleProgress;
pub use tier::{ContentTier, TieredText};
