//! ContentLibrary port - tiered lesson and quiz text.

use crate::domain::content::{Lesson, LearningModule};

/// Read access to the learning modules.
///
/// The library is external data; the adaptation engine only chooses which
/// tier of each text to show.
pub trait ContentLibrary: Send + Sync {
    /// All modules, in catalogue order.
    fn modules(&self) -> &[LearningModule];

    /// Finds a module by id.
    fn module(&self, module_id: &str) -> Option<&LearningModule> {
        self.modules().iter().find(|m| m.id == module_id)
    }

    /// Finds a lesson within a module.
    fn lesson(&self, module_id: &str, lesson_id: &str) -> Option<(&LearningModule, &Lesson)> {
        let module = self.module(module_id)?;
        let lesson = module.lesson(lesson_id)?;
        Some((module, lesson))
    }
}
