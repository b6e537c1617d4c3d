//! Content tiers and tiered text with fallback resolution.

use serde::{Deserialize, Serialize};

crate::learner_enum! {
    /// Which pre-authored variant of a text to display
    ContentTier {
        Simple => "simple",
        Standard => "standard",
        Advanced => "advanced",
    }
}

impl ContentTier {
    /// Tiers to try, most preferred first, when `self` is requested.
    ///
    /// | Requested | Order |
    /// |-----------|-------|
    /// | simple | simple, standard, advanced |
    /// | standard | standard, simple, advanced |
    /// | advanced | advanced, standard, simple |
    pub fn fallback_order(self) -> [ContentTier; 3] {
        match self {
            ContentTier::Simple => [ContentTier::Simple, ContentTier::Standard, ContentTier::Advanced],
            ContentTier::Standard => [ContentTier::Standard, ContentTier::Simple, ContentTier::Advanced],
            ContentTier::Advanced => [ContentTier::Advanced, ContentTier::Standard, ContentTier::Simple],
        }
    }
}

/// A text bundle with up to one variant per tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<String>,
}

impl TieredText {
    /// Bundle with all three tiers present.
    pub fn new(
        simple: impl Into<String>,
        standard: impl Into<String>,
        advanced: impl Into<String>,
    ) -> Self {
        Self {
            simple: Some(simple.into()),
            standard: Some(standard.into()),
            advanced: Some(advanced.into()),
        }
    }

    /// The variant for exactly `tier`, without fallback.
    pub fn get(&self, tier: ContentTier) -> Option<&str> {
        match tier {
            ContentTier::Simple => self.simple.as_deref(),
            ContentTier::Standard => self.standard.as_deref(),
            ContentTier::Advanced => self.advanced.as_deref(),
        }
    }

    /// Resolves `tier` through its fallback order.
    ///
    /// Returns `None` only when the bundle is empty.
    pub fn resolve(&self, tier: ContentTier) -> Option<&str> {
        tier.fallback_order().into_iter().find_map(|t| self.get(t))
    }

    pub fn is_empty(&self) -> bool {
        self.simple.is_none() && self.standard.is_none() && self.advanced.is_none()
    }
}
