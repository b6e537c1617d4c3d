//! Learnwise - adaptive learning personalization
//!
//! Scores a short behavioral questionnaire into a learner profile, adapts
//! presentation and content to that profile, and shares profiles as short
//! three-word codes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
