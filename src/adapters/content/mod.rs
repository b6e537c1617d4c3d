//! Content library adapters

mod builtin;
mod yaml_file;

use std::path::Path;
use std::sync::Arc;

pub use builtin::BuiltinContentLibrary;
pub use yaml_file::YamlContentLibrary;

use crate::domain::foundation::DomainError;
use crate::ports::ContentLibrary;

/// The YAML library at `path`, or the built-in library when `path` is `None`.
pub fn open_library(path: Option<&Path>) -> Result<Arc<dyn ContentLibrary>, DomainError> {
    match path {
        Some(path) => Ok(Arc::new(YamlContentLibrary::load(path)?)),
        None => Ok(Arc::new(BuiltinContentLibrary::new())),
    }
}
