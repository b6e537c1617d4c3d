//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write the active profile)
//! from query handlers (read it).

pub mod handlers;

pub use handlers::{
    // Learner handlers
    ListPresetsHandler, LoadProfileCodeCommand, LoadProfileCodeHandler, LoadProfileCodeResult,
    ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult,
    // Lesson handlers
    AdaptedLesson, CheckQuizAnswerHandler, CheckQuizAnswerQuery, GetAdaptedLessonHandler,
    GetAdaptedLessonQuery, GetTutorContextHandler, GetTutorContextQuery, TutorContext,
};
