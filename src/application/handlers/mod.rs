//! Command and query handlers.
//!
//! Handlers are synchronous: the domain never blocks and the ports are
//! in-memory once an adapter has been constructed. Handlers that read or
//! change the learner's profile take the session's
//! [`ActiveProfile`](crate::domain::learner::ActiveProfile) explicitly.

pub mod learner;
pub mod lesson;

pub use learner::{
    ListPresetsHandler, LoadProfileCodeCommand, LoadProfileCodeHandler, LoadProfileCodeResult,
    ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult,
};
pub use lesson::{
    AdaptedLesson, CheckQuizAnswerHandler, CheckQuizAnswerQuery, GetAdaptedLessonHandler,
    GetAdaptedLessonQuery, GetTutorContextHandler, GetTutorContextQuery, TutorContext,
};
