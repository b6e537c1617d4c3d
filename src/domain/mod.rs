//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, ordered rule chains)
//! - `learner` - The ten-field learner profile and the active-profile slot
//! - `assessment` - Question shapes, answer sets, scoring and sessions
//! - `adaptation` - Profile to UI, content tier, voice persona and paths
//! - `content` - Tiered lesson/quiz text and module progress
//! - `codec` - Shareable profile codes and links

pub mod adaptation;
pub mod assessment;
pub mod codec;
pub mod content;
pub mod foundation;
pub mod learner;
