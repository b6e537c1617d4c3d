//! Built-in content library: heart health and nutrition.

use once_cell::sync::Lazy;

use crate::domain::content::{
    LearningModule, Lesson, LessonKind, QuizOption, QuizQuestion, TieredText,
};
use crate::ports::ContentLibrary;

static MODULES: Lazy<Vec<LearningModule>> = Lazy::new(|| vec![heart_health(), nutrition()]);

fn heart_health() -> LearningModule {
    LearningModule {
        id: "cardiovascular-health".to_string(),
        title: "Heart Health Basics".to_string(),
        description: "Understanding how your heart works and how to keep it healthy".to_string(),
        duration: "25 min".to_string(),
        lessons: vec![
            Lesson {
                visual_aids: vec![
                    "heart-diagram-simple.svg".to_string(),
                    "blood-flow-animation.gif".to_string(),
                ],
                audio_script: Some("Let me tell you about your amazing heart...".to_string()),
                ..lesson(
                    "heart-anatomy",
                    "How Your Heart Works",
                    LessonKind::Text,
                    TieredText::new(
                        "Your heart is like a pump. It pushes blood around your body. Blood carries oxygen and food to all parts of your body.",
                        "The heart is a muscular pump that circulates blood throughout your body. Blood delivers oxygen and nutrients to your organs and tissues.",
                        "The cardiovascular system consists of the heart, blood vessels, and blood. The heart's four chambers work in coordination to maintain systemic and pulmonary circulation, ensuring optimal tissue perfusion.",
                    ),
                )
            },
            lesson(
                "blood-pressure-basics",
                "Understanding Blood Pressure",
                LessonKind::Text,
                TieredText::new(
                    "Blood pressure is how hard your blood pushes against your blood vessel walls. Normal is usually around 120/80.",
                    "Blood pressure measures the force of blood against artery walls. It's recorded as two numbers: systolic (top) and diastolic (bottom) pressure.",
                    "Blood pressure represents the hemodynamic force exerted by circulating blood on arterial walls. Systolic pressure reflects ventricular contraction, while diastolic represents ventricular relaxation and arterial elasticity.",
                ),
            ),
            lesson(
                "heart-healthy-habits",
                "Keeping Your Heart Healthy",
                LessonKind::Interactive,
                TieredText::new(
                    "Eat good foods. Move your body. Don't smoke. Get enough sleep. These help your heart stay strong.",
                    "Maintain heart health through regular exercise, a balanced diet rich in fruits and vegetables, adequate sleep, stress management, and avoiding tobacco.",
                    "Cardiovascular risk reduction involves multiple lifestyle interventions: aerobic exercise (150 min/week), Mediterranean-style diet, optimal sleep hygiene (7-9 hours), stress reduction techniques, and smoking cessation.",
                ),
            ),
        ],
        quiz_questions: vec![QuizQuestion {
            id: "q1".to_string(),
            question: TieredText::new(
                "What does your heart do?",
                "What is the primary function of the heart?",
                "Which best describes the heart's role in cardiovascular physiology?",
            ),
            options: vec![
                QuizOption {
                    id: "a".to_string(),
                    text: TieredText::new(
                        "Pumps blood around your body",
                        "Circulates blood throughout the body",
                        "Maintains hemodynamic circulation via coordinated ventricular contractions",
                    ),
                    correct: true,
                    explanation: TieredText::new(
                        "Yes! Your heart pumps blood to bring oxygen and food to all parts of your body.",
                        "Correct! The heart's main job is to pump blood, delivering oxygen and nutrients throughout your body.",
                        "Excellent! The heart functions as a dual-pump system maintaining both systemic and pulmonary circulation.",
                    ),
                },
                QuizOption {
                    id: "b".to_string(),
                    text: TieredText::new(
                        "Makes you breathe",
                        "Controls breathing",
                        "Regulates respiratory function",
                    ),
                    correct: false,
                    explanation: TieredText::new(
                        "Not quite. Your lungs help you breathe. Your heart pumps blood.",
                        "Not correct. The lungs control breathing, while the heart pumps blood.",
                        "Incorrect. Respiratory control is managed by the medullary respiratory centers, not the heart.",
                    ),
                },
            ],
        }],
    }
}

fn nutrition() -> LearningModule {
    LearningModule {
        id: "nutrition-basics".to_string(),
        title: "Nutrition Fundamentals".to_string(),
        description: "Learn about nutrients your body needs and how to eat well".to_string(),
        duration: "30 min".to_string(),
        lessons: vec![
            lesson(
                "macronutrients",
                "The Big Three: Carbs, Proteins, and Fats",
                LessonKind::Text,
                TieredText::new(
                    "Your body needs three main types of food: carbs for energy, protein to build muscles, and healthy fats for your brain.",
                    "Macronutrients include carbohydrates (energy), proteins (tissue building and repair), and fats (hormone production and brain function).",
                    "Macronutrients provide energy and structural components: carbohydrates (4 kcal/g) for immediate energy, proteins (4 kcal/g) for tissue synthesis and enzymatic functions, and lipids (9 kcal/g) for membrane integrity and signaling molecules.",
                ),
            ),
            lesson(
                "portion-control",
                "How Much Should You Eat?",
                LessonKind::Interactive,
                TieredText::new(
                    "Use your hand to measure food. Your palm = protein. Your fist = vegetables. Your thumb = healthy fats.",
                    "Practice portion control using hand measurements as guides. Fill half your plate with vegetables, quarter with lean protein, quarter with whole grains.",
                    "Implement evidence-based portion control strategies using anthropometric measurements. Follow the MyPlate guidelines: 50% non-starchy vegetables, 25% lean protein, 25% complex carbohydrates.",
                ),
            ),
        ],
        quiz_questions: vec![QuizQuestion {
            id: "q1".to_string(),
            question: TieredText::new(
                "What gives your body energy?",
                "Which macronutrient is the body's primary energy source?",
                "Which macronutrient provides the most readily available glucose for cellular metabolism?",
            ),
            options: vec![QuizOption {
                id: "a".to_string(),
                text: TieredText::new(
                    "Carbs (like bread and fruit)",
                    "Carbohydrates",
                    "Carbohydrates via glycolytic pathways",
                ),
                correct: true,
                explanation: TieredText::new(
                    "Right! Carbs give you quick energy for daily activities.",
                    "Correct! Carbohydrates are broken down into glucose, your body's preferred energy source.",
                    "Excellent! Carbohydrates are metabolized to glucose, the primary substrate for cellular ATP production.",
                ),
            }],
        }],
    }
}

/// Every built-in lesson can open the conversational tutor.
fn lesson(id: &str, title: &str, kind: LessonKind, content: TieredText) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        content,
        visual_aids: Vec::new(),
        audio_script: None,
        conversational_enabled: true,
    }
}

/// Content library compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContentLibrary;

impl BuiltinContentLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl ContentLibrary for BuiltinContentLibrary {
    fn modules(&self) -> &[LearningModule] {
        &MODULES
    }
}
