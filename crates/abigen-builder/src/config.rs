//! Generation settings

use serde::{Deserialize, Serialize};

/// Tool name written into the provenance comment
pub const DEFAULT_TOOL_NAME: &str = "eosio-abigen";

/// How unreferenced structs are pruned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneMode {
    /// One membership test per struct against every accumulated struct,
    /// action and table. A struct referenced only by a pruned struct survives.
    #[default]
    SinglePass,
    /// Fixed-point reachability from action and table roots
    Closure,
}

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Contract whose declarations are collected
    pub contract: String,
    #[serde(default)]
    pub prune: PruneMode,
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

fn default_tool_name() -> String {
    DEFAULT_TOOL_NAME.to_string()
}

impl GeneratorConfig {
    pub fn new(contract: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            prune: PruneMode::default(),
            tool_name: default_tool_name(),
        }
    }

    pub fn with_prune(mut self, prune: PruneMode) -> Self {
        self.prune = prune;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"contract": "hello"}"#).unwrap();
        assert_eq!(config, GeneratorConfig::new("hello"));
        assert_eq!(config.prune, PruneMode::SinglePass);
        assert_eq!(config.tool_name, "eosio-abigen");
    }

    #[test]
    fn test_prune_mode_spelling() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"contract": "hello", "prune": "closure"}"#).unwrap();
        assert_eq!(config.prune, PruneMode::Closure);
    }
}
