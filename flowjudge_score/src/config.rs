// Judge configuration.
//
// Bundles the aggregation weights with the tunable constants of the
// individual checkers. Every field has a default, so a config file only
// needs to name what it overrides:
//
//   { "weights": { "keyword": 0.4, "rhyme": 0.4, "rhythm": 0.1, "meaning": 0.1 },
//     "context_window": 20 }
//
// Loaded from JSON by `JudgeConfig::load()`; weights are validated during
// deserialization (see `aggregate.rs`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::ScoringWeights;
use crate::context::{CONTEXT_SATURATION, CONTEXT_WINDOW};
use crate::error::JudgeError;
use crate::keyword::KEYWORD_SATURATION;
use crate::rhyme::RHYME_TAIL_CHARS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Weights of the four checkers in the total.
    pub weights: ScoringWeights,
    /// Trailing chars of each verse compared by the rhyme checker.
    pub rhyme_tail_chars: usize,
    /// Distinct keywords needed for a full keyword score.
    pub keyword_saturation: usize,
    /// Max gap in chars between two keywords used in context.
    pub context_window: usize,
    /// Contextual keyword pairs needed for a full meaning score.
    pub context_saturation: usize,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        JudgeConfig {
            weights: ScoringWeights::default(),
            rhyme_tail_chars: RHYME_TAIL_CHARS,
            keyword_saturation: KEYWORD_SATURATION,
            context_window: CONTEXT_WINDOW,
            context_saturation: CONTEXT_SATURATION,
        }
    }
}

impl JudgeConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, JudgeError> {
        let config: JudgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, JudgeError> {
        let data = std::fs::read_to_string(path).map_err(|source| JudgeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    fn validate(&self) -> Result<(), JudgeError> {
        if self.keyword_saturation == 0 || self.context_saturation == 0 {
            return Err(JudgeError::InvalidConfig(
                "saturation counts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
