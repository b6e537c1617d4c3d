//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to its data sources:
//! - `question_bank` - The built-in assessment questionnaire
//! - `content` - Built-in and YAML file content libraries

pub mod content;
pub mod question_bank;

pub use content::{open_library, BuiltinContentLibrary, YamlContentLibrary};
pub use question_bank::BuiltinQuestionBank;
