use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse account-sprawl classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Tiered thresholds on (active platforms, total handles). Crossing either
/// bound promotes to the more severe tier.
pub fn risk_level(active_platforms: usize, total_handles: usize) -> RiskLevel {
    if active_platforms <= 6 && total_handles <= 10 {
        RiskLevel::Low
    } else if active_platforms <= 9 && total_handles <= 15 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_low() {
        assert_eq!(risk_level(0, 0), RiskLevel::Low);
    }

    #[test]
    fn test_low_tier_boundaries_inclusive() {
        assert_eq!(risk_level(6, 10), RiskLevel::Low);
    }

    #[test]
    fn test_platform_count_alone_promotes() {
        assert_eq!(risk_level(7, 8), RiskLevel::Medium);
        assert_eq!(risk_level(10, 8), RiskLevel::High);
    }

    #[test]
    fn test_handle_count_alone_promotes() {
        assert_eq!(risk_level(4, 11), RiskLevel::Medium);
        assert_eq!(risk_level(4, 16), RiskLevel::High);
    }

    #[test]
    fn test_medium_tier_boundaries_inclusive() {
        assert_eq!(risk_level(9, 15), RiskLevel::Medium);
        assert_eq!(risk_level(9, 16), RiskLevel::High);
        assert_eq!(risk_level(10, 15), RiskLevel::High);
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(RiskLevel::High.to_string(), "HIGH");
    }
}
