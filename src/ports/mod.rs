//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `QuestionBank` - Ordered assessment questions with weighted options
//! - `ContentLibrary` - Learning modules with tiered lesson and quiz text
//!
//! Both are synchronous: the core never blocks or performs I/O after an
//! adapter has been constructed.

mod content_library;
mod question_bank;

pub use content_library::ContentLibrary;
pub use question_bank::QuestionBank;
