//! Learnwise command-line entry point.

mod cli;

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use learnwise::adapters::{open_library, BuiltinQuestionBank};
use learnwise::application::{
    CheckQuizAnswerHandler, CheckQuizAnswerQuery, GetAdaptedLessonHandler, GetAdaptedLessonQuery,
    GetTutorContextHandler, GetTutorContextQuery, ListPresetsHandler, LoadProfileCodeCommand,
    LoadProfileCodeHandler, LoadProfileCodeResult, ScoreAssessmentCommand,
    ScoreAssessmentHandler,
};
use learnwise::application::handlers::learner::normalize;
use learnwise::config::{AppConfig, ConfigError};
use learnwise::domain::adaptation::{
    button_variant_for, content_tier_for, language_style_for, learning_paths_for, ui_config_for,
    voice_agent_for, ButtonVariant, LanguageStyle, LearningPath, UiConfig, VoiceAgentConfig,
};
use learnwise::domain::assessment::{AnswerSet, AssessmentSession};
use learnwise::domain::codec::{
    describe, describe_profile, encode, share_url, verify_tables, ProfileCode,
};
use learnwise::domain::content::ContentTier;
use learnwise::domain::foundation::{DomainError, ErrorCode};
use learnwise::domain::learner::{ActiveProfile, LearnerProfile};
use learnwise::logging;
use learnwise::ports::{ContentLibrary, QuestionBank};

use crate::cli::{Cli, Commands};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            match &err {
                CliError::Domain(e) if e.is_user_correctable() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    logging::init(&config.logging, cli.verbose)?;
    verify_tables()?;

    let app = App {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Assess { answers } => app.assess(answers),
        Commands::Decode { code } => app.decode(&code),
        Commands::Describe { code } => app.describe(&code),
        Commands::Encode { profile } => app.encode(profile),
        Commands::Presets => app.presets(),
        Commands::Adapt { code } => app.adapt(&code),
        Commands::Lesson {
            code,
            module,
            lesson,
        } => app.lesson(&code, module, lesson),
        Commands::Quiz {
            code,
            module,
            question,
            option,
        } => app.quiz(&code, module, question, option),
        Commands::Tutor {
            code,
            module,
            lesson,
        } => app.tutor(&code, module, lesson),
        Commands::Share { code } => app.share(&code),
        Commands::Questions => app.questions(),
    }
}

#[derive(Serialize)]
struct ProfileOutput {
    code: ProfileCode,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<bool>,
    profile: LearnerProfile,
}

#[derive(Serialize)]
struct AdaptOutput {
    code: ProfileCode,
    tier: ContentTier,
    ui: UiConfig,
    button_variant: ButtonVariant,
    language: LanguageStyle,
    voice: VoiceAgentConfig,
    agent_id: String,
    learning_paths: Vec<LearningPath>,
}

struct App {
    config: AppConfig,
    json: bool,
}

impl App {
    fn assess(&self, answers: Vec<u8>) -> Result<()> {
        let bank: Arc<dyn QuestionBank> = Arc::new(BuiltinQuestionBank::new());

        let output = if answers.is_empty() {
            let profile = ask_questions(AssessmentSession::new(bank))?;
            let code = encode(&profile);
            ProfileOutput {
                description: describe_profile(&profile),
                code,
                preset: None,
                profile,
            }
        } else {
            let mut active = ActiveProfile::new();
            let result = ScoreAssessmentHandler::new(bank).handle(
                ScoreAssessmentCommand {
                    answers: AnswerSet::from(answers),
                },
                &mut active,
            )?;
            ProfileOutput {
                code: result.code,
                description: result.description,
                preset: None,
                profile: result.profile,
            }
        };

        self.emit(&output, || print_profile(&output))
    }

    fn decode(&self, code: &str) -> Result<()> {
        let (_, loaded) = load(code)?;
        let output = ProfileOutput {
            code: loaded.code,
            description: loaded.description,
            preset: Some(loaded.preset),
            profile: loaded.profile,
        };
        self.emit(&output, || print_profile(&output))
    }

    fn describe(&self, code: &str) -> Result<()> {
        let code = normalize(code);
        let description = describe(&code);
        self.emit(
            &serde_json::json!({ "code": code, "description": description }),
            || println!("{}", description),
        )
    }

    fn encode(&self, profile: Option<String>) -> Result<()> {
        let raw = match profile {
            Some(raw) => raw,
            None => {
                let mut raw = String::new();
                io::stdin().read_to_string(&mut raw)?;
                raw
            }
        };
        let profile: LearnerProfile = serde_json::from_str(&raw)?;
        let output = ProfileOutput {
            code: encode(&profile),
            description: describe_profile(&profile),
            preset: None,
            profile,
        };
        self.emit(&output, || println!("{}", output.code))
    }

    fn presets(&self) -> Result<()> {
        let presets = ListPresetsHandler::new().handle();
        self.emit(&presets, || {
            for preset in &presets {
                println!("{:<22} {}", preset.code, preset.description);
            }
        })
    }

    fn adapt(&self, code: &str) -> Result<()> {
        let (_, loaded) = load(code)?;
        let profile = loaded.profile;
        let voice = voice_agent_for(&profile);

        let output = AdaptOutput {
            code: loaded.code,
            tier: content_tier_for(&profile),
            ui: ui_config_for(&profile),
            button_variant: button_variant_for(&profile),
            language: language_style_for(&profile),
            agent_id: self.config.voice.agent_id_for(voice.persona_id).to_string(),
            voice,
            learning_paths: learning_paths_for(&profile),
        };

        self.emit(&output, || {
            println!("{} - {}", output.code, loaded.description);
            println!(
                "ui:      buttons {}, font {}, spacing {}, contrast {}, animation {}, complexity {}",
                output.ui.button_size,
                output.ui.font_size,
                output.ui.spacing,
                output.ui.contrast,
                output.ui.animation_level,
                output.ui.complexity
            );
            println!("buttons: {}", output.button_variant);
            println!("content: {}", output.tier);
            println!(
                "voice:   {} ({} style, {} pace, {} encouragement) agent {}",
                output.voice.persona_id,
                output.voice.style,
                output.voice.pace,
                output.voice.encouragement,
                output.agent_id
            );
            println!("paths:");
            for path in &output.learning_paths {
                println!(
                    "  {:<24} {:>3} min  {:>2} lessons  {}",
                    path.title, path.estimated_minutes, path.lessons, path.status
                );
            }
        })
    }

    fn lesson(&self, code: &str, module_id: String, lesson_id: String) -> Result<()> {
        let (active, _) = load(code)?;
        let lesson = GetAdaptedLessonHandler::new(self.library()?).handle(
            GetAdaptedLessonQuery {
                module_id,
                lesson_id,
            },
            &active,
        )?;

        self.emit(&lesson, || {
            println!("{} / {}", lesson.module_title, lesson.lesson_title);
            println!(
                "Lesson {} of {} ({} text)",
                lesson.position, lesson.lesson_count, lesson.tier
            );
            println!();
            println!("{}", lesson.text);
        })
    }

    fn quiz(
        &self,
        code: &str,
        module_id: String,
        question_id: String,
        option_id: String,
    ) -> Result<()> {
        let (active, _) = load(code)?;
        let feedback = CheckQuizAnswerHandler::new(self.library()?).handle(
            CheckQuizAnswerQuery {
                module_id,
                question_id,
                option_id,
            },
            &active,
        )?;

        self.emit(&feedback, || {
            println!("{}", if feedback.correct { "Correct" } else { "Incorrect" });
            println!("{}", feedback.explanation);
        })
    }

    fn tutor(&self, code: &str, module_id: String, lesson_id: String) -> Result<()> {
        let (active, _) = load(code)?;
        let tutor = GetTutorContextHandler::new(self.library()?, self.config.voice.clone())
            .handle(
                GetTutorContextQuery {
                    module_id,
                    lesson_id,
                },
                &active,
            )?;

        self.emit(&tutor, || {
            println!("agent:   {}", tutor.agent_id);
            println!(
                "persona: {} ({} style, {} pace, {} encouragement)",
                tutor.persona.persona_id,
                tutor.persona.style,
                tutor.persona.pace,
                tutor.persona.encouragement
            );
            println!();
            println!("{}", tutor.context);
        })
    }

    fn share(&self, code: &str) -> Result<()> {
        let (_, loaded) = load(code)?;
        let base = self
            .config
            .share
            .base_url()
            .map_err(ConfigError::from)?;
        let url = share_url(&base, &loaded.code);
        self.emit(
            &serde_json::json!({ "code": loaded.code, "url": url.as_str() }),
            || println!("{}", url),
        )
    }

    fn questions(&self) -> Result<()> {
        let bank = BuiltinQuestionBank::new();
        self.emit(&bank.questions(), || {
            for (i, question) in bank.questions().iter().enumerate() {
                println!("{}. {} [{}]", i + 1, question.prompt, question.id);
                for option in &question.options {
                    println!("   {}) {} (weight {})", option.id, option.label, option.weight);
                }
            }
        })
    }

    fn library(&self) -> Result<Arc<dyn ContentLibrary>> {
        Ok(open_library(self.config.content.library_path.as_deref())?)
    }

    /// Prints `value` as JSON with `--json`, otherwise runs `human`.
    fn emit<T: Serialize + ?Sized>(&self, value: &T, human: impl FnOnce()) -> Result<()> {
        if self.json {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        } else {
            human();
        }
        Ok(())
    }
}

/// Loads `code` into a fresh active profile.
fn load(code: &str) -> Result<(ActiveProfile, LoadProfileCodeResult)> {
    let mut active = ActiveProfile::new();
    let loaded = LoadProfileCodeHandler::new().handle(
        LoadProfileCodeCommand {
            code: code.to_string(),
        },
        &mut active,
    )?;
    Ok((active, loaded))
}

/// Walks the questionnaire on stdin, one option letter per line.
///
/// End of input stops early; unanswered questions score as defaults.
fn ask_questions(mut session: AssessmentSession) -> Result<LearnerProfile> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = session.current_question() {
        eprintln!();
        eprintln!(
            "Question {} of {}: {}",
            session.position(),
            session.total(),
            question.prompt
        );
        for option in &question.options {
            eprintln!("  {}) {}", option.id, option.label);
        }
        eprint!("> ");
        io::stderr().flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::warn!(
                answered = session.answered(),
                total = session.total(),
                "Input ended before the assessment was complete"
            );
            break;
        };

        match session.answer_option(line.trim()) {
            Ok(_) => {}
            Err(e) if e.code == ErrorCode::OptionNotFound => {
                eprintln!("Please answer with one of the option letters.");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(session.finish())
}

fn print_profile(output: &ProfileOutput) {
    println!("{} - {}", output.code, output.description);
    let p = &output.profile;
    println!("  learning style:      {}", p.learning_style);
    println!("  motivation:          {}", p.motivation);
    println!("  pace:                {}", p.pace_preference);
    println!("  challenge:           {}", p.challenge_level);
    println!("  social learning:     {}", p.social_learning);
    println!("  time:                {}", p.time_preference);
    println!("  tech comfort:        {}", p.tech_comfort);
    println!("  interface:           {}", p.interface_style);
    println!("  accessibility needs: {}", p.accessibility_needs);
    println!("  literacy:            {}", p.literacy_level);
}
