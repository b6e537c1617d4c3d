//! Built-in nine-question behavioral assessment.

use once_cell::sync::Lazy;

use crate::domain::assessment::{AnswerOption, Question};
use crate::ports::QuestionBank;

static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            "learning-style-1",
            "When learning something new, you prefer to:",
            [
                ("See diagrams, charts, and visual explanations", 1),
                ("Listen to explanations and discussions", 2),
                ("Practice hands-on activities and experiments", 3),
                ("Read detailed written instructions", 4),
            ],
        ),
        question(
            "tech-comfort",
            "How comfortable are you with technology and apps?",
            [
                ("Very comfortable - I love trying new features", 3),
                ("Somewhat comfortable - I can figure things out", 2),
                ("Basic comfort - I prefer simple, familiar interfaces", 1),
                ("I need help with technology sometimes", 1),
            ],
        ),
        question(
            "interface-preference",
            "Which type of app design do you prefer?",
            [
                ("Sleek, modern design with lots of features", 3),
                ("Clean, simple design that's easy to navigate", 2),
                ("Large buttons and text that's easy to see", 1),
                ("Whatever works best - I don't have a preference", 2),
            ],
        ),
        question(
            "reading-preference",
            "When reading health information, you prefer:",
            [
                ("Detailed explanations with medical terminology", 3),
                ("Clear explanations in everyday language", 2),
                ("Simple, easy-to-understand descriptions", 1),
                ("Visual guides with minimal text", 1),
            ],
        ),
        question(
            "accessibility-needs",
            "Do you have any preferences that would help you learn better?",
            [
                ("I'd like larger text and buttons", 1),
                ("I'd prefer audio options when available", 2),
                ("I need more time to read and process information", 3),
                ("Standard options work fine for me", 4),
            ],
        ),
        question(
            "motivation-1",
            "What motivates you most to learn about health topics?",
            [
                ("Personal curiosity and desire to understand", 1),
                ("Improving health outcomes and achieving goals", 2),
                ("Recognition and sharing knowledge with others", 2),
                ("Both personal interest and practical benefits", 3),
            ],
        ),
        question(
            "pace-1",
            "When studying, you typically prefer to:",
            [
                ("Move quickly through material and cover lots of ground", 1),
                ("Take a steady, consistent pace", 2),
                ("Go slowly and deeply understand each concept", 3),
                ("Vary the pace depending on the topic", 2),
            ],
        ),
        question(
            "challenge-1",
            "How do you feel about challenging health concepts?",
            [
                ("I love tackling complex topics that push my limits", 3),
                ("I prefer moderate challenges with clear guidance", 2),
                ("I like to start with basics and build up gradually", 1),
                ("I prefer easy-to-understand, practical information", 1),
            ],
        ),
        question(
            "time-1",
            "How much time do you typically have for learning sessions?",
            [
                ("5-10 minutes for quick bite-sized lessons", 1),
                ("15-30 minutes for focused study sessions", 2),
                ("45+ minutes for deep-dive learning", 3),
                ("Variable time depending on my schedule", 2),
            ],
        ),
    ]
});

/// Options are lettered a, b, c, d in the order given.
fn question(id: &str, prompt: &str, options: [(&str, u8); 4]) -> Question {
    let options = ["a", "b", "c", "d"]
        .iter()
        .zip(options)
        .map(|(letter, (label, weight))| AnswerOption::new(*letter, label, weight))
        .collect();
    Question::new(id, prompt, options)
}

/// The stock questionnaire, in scoring order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestionBank;

impl BuiltinQuestionBank {
    pub fn new() -> Self {
        Self
    }
}

impl QuestionBank for BuiltinQuestionBank {
    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }
}
