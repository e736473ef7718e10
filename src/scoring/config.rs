use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::inventory::PlatformId;

/// Scoring configuration.
///
/// Every field is optional; the built-in weight table and defaults apply
/// where nothing is given. The formula constants themselves (efficiency
/// penalty, amplification, sub-score saturation) are fixed so scores stay
/// comparable between audits.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   default_weight: 5
///   seed: 7
///   weights:
///     instagram: 12
///     twitch: 2
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight used for platforms without a table entry (default: 5).
    /// Unknown platforms are not an error; they score with this weight.
    #[serde(default)]
    pub default_weight: Option<u32>,

    /// Per-platform overrides of the built-in engagement weights.
    #[serde(default)]
    pub weights: Option<BTreeMap<PlatformId, u32>>,

    /// Seed for recommendation selection. Same seed, same picks (default: 0).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_weight: Some(5),
            weights: None,
            seed: Some(0),
        }
    }
}

impl ScoringConfig {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }
}
