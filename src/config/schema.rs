use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// App configuration (~/.config/presence-audit/config.yaml).
///
/// Everything is optional; a missing file means defaults throughout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Scoring overrides: platform weights, default weight, seed.
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Default audit level when neither the CLI flag nor the inventory
    /// file sets one. Parsed lazily for a friendlier error.
    #[serde(default)]
    pub level: Option<String>,
}
