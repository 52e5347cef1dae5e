//! Search and engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::game::Rules;
use crate::search::EvalWeights;

/// Configuration for the adversarial search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched per root: 1 = own move only, 2 = own move plus reply.
    pub depth: u32,
    /// Children kept per node after quick evaluation.
    pub beam_width: usize,
    /// Seed for the tie-break generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Soft per-turn budget. Once elapsed, remaining siblings are skipped; a
    /// root searched after that takes its best quick-scored move.
    pub time_budget_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            beam_width: 8,
            seed: None,
            time_budget_ms: None,
        }
    }
}

/// Everything needed to drive a turn: rules, evaluator weights and search
/// limits. Missing fields in a config file take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rule policies.
    pub rules: Rules,
    /// Evaluator weights.
    pub weights: EvalWeights,
    /// Search limits.
    pub search: SearchConfig,
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
