//! YAML file content library.
//!
//! File layout:
//!
//! ```yaml
//! modules:
//!   - id: sleep-basics
//!     title: Sleep Basics
//!     description: Why rest matters
//!     duration: 10 min
//!     lessons:
//!       - id: why-sleep
//!         title: Why We Sleep
//!         content:
//!           simple: Sleep helps your body rest.
//!           standard: Sleep lets the body and brain recover.
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::content::LearningModule;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ContentLibrary;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LibraryFile {
    modules: Vec<LearningModule>,
}

/// Content library read once from a YAML file.
#[derive(Debug, Clone)]
pub struct YamlContentLibrary {
    source: PathBuf,
    modules: Vec<LearningModule>,
}

impl YamlContentLibrary {
    /// Reads and validates the library at `path`.
    ///
    /// # Errors
    ///
    /// `ContentLoadFailed` if the file cannot be read, is not valid YAML,
    /// or repeats a module or lesson id.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            load_error(path, format!("Failed to read content library: {}", e))
        })?;

        let library = Self::parse(&raw, path)?;
        tracing::debug!(
            path = %path.display(),
            modules = library.modules.len(),
            "Loaded content library"
        );
        Ok(library)
    }

    /// Parses library YAML; `source` is used only in error details.
    pub fn parse(yaml: &str, source: impl AsRef<Path>) -> Result<Self, DomainError> {
        let source = source.as_ref();
        let file: LibraryFile = serde_yaml::from_str(yaml)
            .map_err(|e| load_error(source, format!("Invalid content library: {}", e)))?;

        check_unique_ids(&file.modules).map_err(|reason| load_error(source, reason))?;

        for module in &file.modules {
            for lesson in module.lessons.iter().filter(|l| l.content.is_empty()) {
                tracing::warn!(
                    module = %module.id,
                    lesson = %lesson.id,
                    "Lesson has no text in any tier"
                );
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            modules: file.modules,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl ContentLibrary for YamlContentLibrary {
    fn modules(&self) -> &[LearningModule] {
        &self.modules
    }
}

fn check_unique_ids(modules: &[LearningModule]) -> Result<(), String> {
    let mut module_ids = HashSet::new();
    for module in modules {
        if !module_ids.insert(module.id.as_str()) {
            return Err(format!("Duplicate module id '{}'", module.id));
        }
        let mut lesson_ids = HashSet::new();
        for lesson in &module.lessons {
            if !lesson_ids.insert(lesson.id.as_str()) {
                return Err(format!(
                    "Duplicate lesson id '{}' in module '{}'",
                    lesson.id, module.id
                ));
            }
        }
    }
    Ok(())
}

fn load_error(path: &Path, message: String) -> DomainError {
    DomainError::new(ErrorCode::ContentLoadFailed, message)
        .with_detail("path", path.display().to_string())
}
