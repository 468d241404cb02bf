//! Computer player configuration.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Computer player configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Strength tier used for every move.
    pub difficulty: Difficulty,

    /// Random seed for the easy and medium strategies.
    /// `None` seeds from entropy; a fixed seed makes play reproducible.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Create a new config with a custom difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AiConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AiConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_seed(123);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_serialization() {
        let config = AiConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
