//! Voice agent configuration

use serde::Deserialize;
use std::collections::HashMap;

use super::error::ValidationError;
use crate::domain::adaptation::PersonaId;

/// Stock conversational agent used for every persona unless overridden.
pub const DEFAULT_AGENT_ID: &str = "agent_01jzaf1ma5fehrgqx2npgdq8sq";

/// Maps voice personas to external conversational agent ids
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    /// Agent used for personas without an entry in `agents`
    #[serde(default = "default_agent_id")]
    pub default_agent_id: String,

    /// Per-persona overrides keyed by persona id (`simple`, `anxious`, ...)
    #[serde(default)]
    pub agents: HashMap<String, String>,
}

fn default_agent_id() -> String {
    DEFAULT_AGENT_ID.to_string()
}

impl VoiceConfig {
    /// External agent id for `persona`
    pub fn agent_id_for(&self, persona: PersonaId) -> &str {
        self.agents
            .get(persona.as_str())
            .map(String::as_str)
            .unwrap_or(&self.default_agent_id)
    }

    /// Validate voice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_agent_id.trim().is_empty() {
            return Err(ValidationError::EmptyAgentId("default".to_string()));
        }
        if let Some((persona, _)) = self.agents.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(ValidationError::EmptyAgentId(persona.clone()));
        }
        Ok(())
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            default_agent_id: default_agent_id(),
            agents: HashMap::new(),
        }
    }
}
