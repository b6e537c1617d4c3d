//! ModuleProgress - position and completion within one module.

use std::collections::BTreeSet;

use serde::Serialize;

/// Tracks which lesson is open and which have been completed.
///
/// Moving forward marks the current lesson complete; moving back never
/// un-completes anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleProgress {
    lesson_count: usize,
    current: usize,
    completed: BTreeSet<usize>,
}

impl ModuleProgress {
    pub fn new(lesson_count: usize) -> Self {
        Self {
            lesson_count,
            current: 0,
            completed: BTreeSet::new(),
        }
    }

    /// Index of the open lesson.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn lesson_count(&self) -> usize {
        self.lesson_count
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.lesson_count == 0 || self.current == self.lesson_count - 1
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completion percentage (0-100).
    pub fn percent_complete(&self) -> u8 {
        if self.lesson_count == 0 {
            return 0;
        }
        ((self.completed.len() * 100) / self.lesson_count) as u8
    }

    /// True once every lesson has been completed.
    pub fn is_finished(&self) -> bool {
        self.lesson_count > 0 && self.completed.len() == self.lesson_count
    }

    /// Marks the open lesson complete and moves to the next one.
    ///
    /// On the last lesson this only marks completion.
    pub fn advance(&mut self) {
        if self.lesson_count == 0 {
            return;
        }
        self.completed.insert(self.current);
        if !self.is_last() {
            self.current += 1;
        }
    }

    /// Moves to the previous lesson, if there is one.
    pub fn back(&mut self) {
        if !self.is_first() {
            self.current -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_starts_at_first_lesson() {
        let p = ModuleProgress::new(3);
        assert!(p.is_first());
        assert!(!p.is_last());
        assert_eq!(p.percent_complete(), 0);
    }

    #[test]
    fn test_advance_marks_complete_and_moves() {
        let mut p = ModuleProgress::new(3);
        p.advance();
        assert_eq!(p.current(), 1);
        assert!(p.is_completed(0));
        assert_eq!(p.percent_complete(), 33);
    }

    #[test]
    fn test_advance_on_last_lesson_stays_put() {
        let mut p = ModuleProgress::new(2);
        p.advance();
        p.advance();
        assert_eq!(p.current(), 1);
        assert!(p.is_finished());
        assert_eq!(p.percent_complete(), 100);

        p.advance();
        assert_eq!(p.completed_count(), 2);
    }

    #[test]
    fn test_back_keeps_completion() {
        let mut p = ModuleProgress::new(3);
        p.advance();
        p.back();
        assert!(p.is_first());
        assert!(p.is_completed(0));

        p.back();
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn test_revisiting_does_not_double_count() {
        let mut p = ModuleProgress::new(3);
        p.advance();
        p.back();
        p.advance();
        assert_eq!(p.completed_count(), 1);
    }

    #[test]
    fn test_empty_module() {
        let mut p = ModuleProgress::new(0);
        p.advance();
        assert_eq!(p.percent_complete(), 0);
        assert!(!p.is_finished());
    }
}
