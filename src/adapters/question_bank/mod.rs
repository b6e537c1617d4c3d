//! Question bank adapters

mod builtin;

pub use builtin::BuiltinQuestionBank;
