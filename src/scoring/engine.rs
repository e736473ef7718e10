use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::inventory::{AuditLevel, HandleInventory, PlatformId};
use crate::probe::ProbeReport;
use crate::scoring::config::ScoringConfig;
use crate::scoring::insights;
use crate::scoring::risk::{risk_level, RiskLevel};
use crate::scoring::validation::validate_inventory;
use crate::scoring::weights::{platform_insight, WeightTable};

/// Fixed amplification applied to the weighted presence sum.
const AMPLIFICATION: f64 = 1.2;
/// Per-extra-account efficiency penalty and its floor. A platform never
/// contributes less than half its base weight.
const EFFICIENCY_STEP: f64 = 0.2;
const EFFICIENCY_FLOOR: f64 = 0.5;
/// Sub-score saturation constants: points per active platform and per handle.
const DIVERSITY_POINTS: usize = 15;
const VOLUME_POINTS: usize = 10;
/// Consistency score reported when there are no handles to compare.
const CONSISTENCY_NO_DATA: u8 = 50;

/// Handle-count priority for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    #[serde(rename = "Consider consolidating")]
    ConsiderConsolidating,
}

impl Priority {
    fn for_count(count: usize) -> Priority {
        match count {
            1 => Priority::High,
            2 => Priority::Medium,
            _ => Priority::ConsiderConsolidating,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::ConsiderConsolidating => "Consider consolidating",
        };
        f.write_str(label)
    }
}

/// Per-platform breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformAnalysis {
    pub account_count: usize,
    pub priority: Priority,
    pub insight: String,
}

/// The audit result. A plain serializable value with no embedded formatting;
/// created fresh per call and owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub overall_score: u8,
    pub active_platform_count: usize,
    pub total_handle_count: usize,
    pub platform_diversity_score: u8,
    pub account_volume_score: u8,
    pub consistency_score: u8,
    pub risk_level: RiskLevel,
    pub risks: Vec<String>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub per_platform: BTreeMap<PlatformId, PlatformAnalysis>,
}

/// Score a handle inventory. See [`score_with_probe`] for the full contract.
pub fn score(
    inventory: &HandleInventory,
    config: &ScoringConfig,
    level: AuditLevel,
) -> Result<ScoringResult, AuditError> {
    score_with_probe(inventory, config, level, None)
}

/// Score a handle inventory with optional profile-probe signals.
///
/// Pure and deterministic: identical input (and seed) yields an identical
/// result. The audit level gates which insight categories appear but never
/// changes a numeric field. Probe data can only add insight strings.
///
/// An empty inventory is not an error: all counts are zero, the overall
/// score is 0, consistency reports 50 ("no data"), and every list is empty.
/// Malformed handles abort atomically with [`AuditError::InvalidInput`].
pub fn score_with_probe(
    inventory: &HandleInventory,
    config: &ScoringConfig,
    level: AuditLevel,
    probe: Option<&ProbeReport>,
) -> Result<ScoringResult, AuditError> {
    validate_inventory(inventory).map_err(AuditError::invalid_input)?;

    if inventory.is_empty() {
        return Ok(ScoringResult {
            overall_score: 0,
            active_platform_count: 0,
            total_handle_count: 0,
            platform_diversity_score: 0,
            account_volume_score: 0,
            consistency_score: CONSISTENCY_NO_DATA,
            risk_level: RiskLevel::Low,
            risks: Vec::new(),
            insights: Vec::new(),
            recommendations: Vec::new(),
            per_platform: BTreeMap::new(),
        });
    }

    let weights = WeightTable::from_config(config);
    let active = inventory.active_platform_count();
    let total = inventory.total_handle_count();

    let weighted_sum: f64 = inventory
        .active_platforms()
        .map(|(platform, handles)| weights.weight(platform) as f64 * efficiency(handles.len()))
        .sum();
    let overall_score = (weighted_sum * AMPLIFICATION).clamp(0.0, 100.0) as u8;

    let platform_diversity_score = (active * DIVERSITY_POINTS).min(100) as u8;
    let account_volume_score = (total * VOLUME_POINTS).min(100) as u8;
    let consistency_score = consistency(&inventory.handles_in_order());

    let per_platform = inventory
        .active_platforms()
        .map(|(platform, handles)| {
            let analysis = PlatformAnalysis {
                account_count: handles.len(),
                priority: Priority::for_count(handles.len()),
                insight: platform_insight(platform).to_string(),
            };
            (platform.clone(), analysis)
        })
        .collect();

    Ok(ScoringResult {
        overall_score,
        active_platform_count: active,
        total_handle_count: total,
        platform_diversity_score,
        account_volume_score,
        consistency_score,
        risk_level: risk_level(active, total),
        risks: insights::collect_risks(inventory),
        insights: insights::collect_insights(inventory, level, probe),
        recommendations: insights::recommendations(active, config.seed()),
        per_platform,
    })
}

/// Efficiency of the nth-account pile on one platform. Redundant accounts
/// contribute less, floored at half the base weight.
fn efficiency(handle_count: usize) -> f64 {
    (1.0 - (handle_count.saturating_sub(1)) as f64 * EFFICIENCY_STEP).max(EFFICIENCY_FLOOR)
}

/// Name-similarity score across handles. The first handle is the baseline:
/// its tokens (length > 2, split on non-alphanumerics, lowercased) are
/// matched as substrings against every other normalized handle.
fn consistency(handles: &[&str]) -> u8 {
    if handles.is_empty() {
        return CONSISTENCY_NO_DATA;
    }

    let tokens: Vec<String> = handles[0]
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() > 2)
        .map(str::to_lowercase)
        .collect();

    if tokens.is_empty() {
        return 0;
    }

    let matching = handles[1..]
        .iter()
        .filter(|handle| {
            let normalized = normalize(handle);
            tokens.iter().any(|token| normalized.contains(token))
        })
        .count();

    ((matching * 100) / handles.len()) as u8
}

/// Lowercased alphanumerics only: strips `@`, underscores, and punctuation.
fn normalize(handle: &str) -> String {
    handle
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
