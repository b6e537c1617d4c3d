//! Lesson query handlers.

mod check_quiz_answer;
mod get_adapted_lesson;
mod get_tutor_context;

pub use check_quiz_answer::{CheckQuizAnswerHandler, CheckQuizAnswerQuery};
pub use get_adapted_lesson::{AdaptedLesson, GetAdaptedLessonHandler, GetAdaptedLessonQuery};
pub use get_tutor_context::{GetTutorContextHandler, GetTutorContextQuery, TutorContext};
