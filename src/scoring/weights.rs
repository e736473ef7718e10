use crate::inventory::PlatformId;
use crate::scoring::config::ScoringConfig;

pub const DEFAULT_WEIGHT: u32 = 5;

/// Built-in engagement-potential weight for a platform.
///
/// Ordered by how much presence on the platform tends to matter for a
/// student-athlete's reach and recruitment profile.
pub fn builtin_weight(platform: &PlatformId) -> Option<u32> {
    let weight = match platform {
        PlatformId::Instagram => 10,
        PlatformId::TikTok => 9,
        PlatformId::YouTube => 8,
        PlatformId::Twitter => 7,
        PlatformId::LinkedIn => 6,
        PlatformId::Facebook => 5,
        PlatformId::Snapchat => 5,
        PlatformId::Threads => 4,
        PlatformId::Twitch => 4,
        PlatformId::Discord => 3,
        PlatformId::BeReal => 3,
        PlatformId::Vsco => 2,
        PlatformId::Custom(_) => return None,
    };
    Some(weight)
}

/// Static one-line insight per platform for the per-platform breakdown.
pub fn platform_insight(platform: &PlatformId) -> &'static str {
    match platform {
        PlatformId::Instagram => "Primary visual platform; keep highlights and bio current.",
        PlatformId::TikTok => "Short-form reach; post training and game-day clips.",
        PlatformId::Twitter => "Real-time updates; watch tone, screenshots last forever.",
        PlatformId::YouTube => "Long-form home for full highlight reels and season recaps.",
        PlatformId::LinkedIn => "Professional anchor; recruiters and NIL partners look here.",
        PlatformId::Snapchat => "Casual channel; assume nothing actually disappears.",
        PlatformId::Facebook => "Reaches family, boosters, and older alumni networks.",
        PlatformId::Twitch => "Streams are unedited and archived; moderate your chat.",
        PlatformId::Discord => "Server history is searchable; moderate what you host.",
        PlatformId::Threads => "Secondary text presence; mirror your strongest content.",
        PlatformId::BeReal => "Unfiltered by design; remember coaches can see it too.",
        PlatformId::Vsco => "Low-pressure portfolio; keep it aligned with your brand.",
        PlatformId::Custom(_) => "Maintain consistent brand presence.",
    }
}

/// Resolved weight lookup: config override, then built-in table, then the
/// default weight for unknown platforms.
#[derive(Debug, Clone)]
pub struct WeightTable {
    config: ScoringConfig,
    default_weight: u32,
}

impl WeightTable {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            default_weight: config.default_weight.unwrap_or(DEFAULT_WEIGHT),
            config: config.clone(),
        }
    }

    pub fn weight(&self, platform: &PlatformId) -> u32 {
        if let Some(overrides) = &self.config.weights {
            if let Some(weight) = overrides.get(platform) {
                return *weight;
            }
        }
        builtin_weight(platform).unwrap_or(self.default_weight)
    }

    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_weights_cover_known_platforms() {
        for platform in [
            PlatformId::Instagram,
            PlatformId::TikTok,
            PlatformId::Twitter,
            PlatformId::YouTube,
            PlatformId::LinkedIn,
            PlatformId::Snapchat,
            PlatformId::Facebook,
            PlatformId::Twitch,
            PlatformId::Discord,
            PlatformId::Threads,
            PlatformId::BeReal,
            PlatformId::Vsco,
        ] {
            let weight = builtin_weight(&platform).unwrap();
            assert!(weight > 0, "{} has non-positive weight", platform);
        }
    }

    #[test]
    fn test_custom_platform_has_no_builtin_weight() {
        assert!(builtin_weight(&PlatformId::from_key("mastodon")).is_none());
    }

    #[test]
    fn test_weight_table_fallback_chain() {
        let table = WeightTable::from_config(&ScoringConfig::default());
        assert_eq!(table.weight(&PlatformId::Instagram), 10);
        assert_eq!(table.weight(&PlatformId::from_key("mastodon")), 5);
    }

    #[test]
    fn test_weight_table_override_wins() {
        let yaml = r#"
default_weight: 3
weights:
  instagram: 1
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let table = WeightTable::from_config(&config);
        assert_eq!(table.weight(&PlatformId::Instagram), 1);
        assert_eq!(table.weight(&PlatformId::TikTok), 9);
        assert_eq!(table.weight(&PlatformId::from_key("mastodon")), 3);
    }

    #[test]
    fn test_platform_insight_fallback() {
        assert_eq!(
            platform_insight(&PlatformId::from_key("mastodon")),
            "Maintain consistent brand presence."
        );
        assert!(platform_insight(&PlatformId::LinkedIn).contains("recruiters"));
    }
}
