//! CLI argument parsing using clap v4

use clap::{Parser, Subcommand};

/// Learnwise - adaptive learning personalization
///
/// Scores the learner questionnaire, adapts lessons to the resulting
/// profile, and shares profiles as three-word codes.
#[derive(Parser, Debug)]
#[command(name = "learnwise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score answers into a profile and print its code
    ///
    /// Without answers, asks each question interactively on stdin.
    Assess {
        /// Comma-separated option weights in question order, e.g. 1,3,2,1,4,1,2,2,2
        #[arg(value_delimiter = ',')]
        answers: Vec<u8>,
    },

    /// Decode a profile code into the full profile
    Decode {
        code: String,
    },

    /// Describe a profile code in one sentence
    Describe {
        code: String,
    },

    /// Encode a profile (JSON) into a code
    Encode {
        /// Profile JSON; read from stdin when omitted
        #[arg(long)]
        profile: Option<String>,
    },

    /// List the preset profile codes
    Presets,

    /// Show UI, content tier, voice persona and learning paths for a code
    Adapt {
        code: String,
    },

    /// Show a lesson adapted to a code
    Lesson {
        code: String,
        module: String,
        lesson: String,
    },

    /// Grade a quiz answer with an explanation adapted to a code
    Quiz {
        code: String,
        module: String,
        question: String,
        option: String,
    },

    /// Show the conversational tutor setup for a lesson
    Tutor {
        code: String,
        module: String,
        lesson: String,
    },

    /// Build a shareable link for a code
    Share {
        code: String,
    },

    /// Print the assessment questions
    Questions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_assess_parses_comma_separated_answers() {
        let cli = Cli::try_parse_from(["learnwise", "assess", "1,3,2,1,4,1,2,2,2"]).unwrap();
        match cli.command {
            Commands::Assess { answers } => assert_eq!(answers, vec![1, 3, 2, 1, 4, 1, 2, 2, 2]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_assess_without_answers_is_interactive() {
        let cli = Cli::try_parse_from(["learnwise", "assess"]).unwrap();
        assert!(matches!(cli.command, Commands::Assess { answers } if answers.is_empty()));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["learnwise", "decode", "wise-oak-bridge", "--json", "-vv"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_lesson_requires_three_arguments() {
        assert!(Cli::try_parse_from(["learnwise", "lesson", "wise-oak-bridge"]).is_err());
    }
}
