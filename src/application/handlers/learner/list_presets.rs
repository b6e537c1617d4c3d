//! ListPresetsHandler - Query handler for the preset profile catalogue.

use crate::domain::codec::{preset_codes, PresetSummary};

/// Handler listing every preset code with its description.
#[derive(Debug, Default)]
pub struct ListPresetsHandler;

impl ListPresetsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> Vec<PresetSummary> {
        preset_codes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_five_presets_with_descriptions() {
        let presets = ListPresetsHandler::new().handle();
        assert_eq!(presets.len(), 5);
        assert_eq!(presets[0].code, "bright-eagle-summit");
        assert_eq!(
            presets[4].description,
            "hands-on learner with advanced interface and high challenge"
        );
    }
}
