//! AI configuration

use crate::eval::Heuristic;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// AI configuration for game playing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Search depth in plies below each root move
    pub depth: u32,
    /// Evaluation function
    pub heuristic: Heuristic,
    /// Random seed for tie-breaks (None = random)
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: 6,
            heuristic: Heuristic::Material,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Create config for alpha-beta at given depth
    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// Set heuristic
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.depth, 6);
        assert_eq!(config.heuristic, Heuristic::Material);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_ai_config_builders() {
        let config = AiConfig::alpha_beta(10)
            .with_heuristic(Heuristic::Weighted)
            .with_seed(7);
        assert_eq!(config.depth, 10);
        assert_eq!(config.heuristic, Heuristic::Weighted);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AiConfig = serde_json::from_str(r#"{"heuristic": "weighted"}"#).unwrap();
        assert_eq!(config.depth, 6);
        assert_eq!(config.heuristic, Heuristic::Weighted);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("checkers-ai-config-{}.json", std::process::id()));
        let config = AiConfig::alpha_beta(3).with_seed(11);
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = AiConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(AiConfig::load(Path::new("/nonexistent/checkers.json")).is_err());
    }
}
