//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the ordered rule-chain machinery used
//! by the scoring and adaptation engines.

mod errors;
mod rules;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use rules::{threshold, Rule, RuleChain, RuleMatch};
