use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::AuditError;

/// A supported social network.
///
/// Parsing is forgiving: case-insensitive, common aliases accepted, and a
/// key nobody recognizes becomes `Custom` instead of an error. Unknown
/// platforms score with the configured default weight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlatformId {
    Instagram,
    TikTok,
    Twitter,
    YouTube,
    LinkedIn,
    Snapchat,
    Facebook,
    Twitch,
    Discord,
    Threads,
    BeReal,
    Vsco,
    Custom(String),
}

impl PlatformId {
    /// Parse a platform key. Accepts aliases ("x", "ig", "yt", "fb") and the
    /// legacy `<platform>_handles` form the original intake used.
    pub fn from_key(key: &str) -> PlatformId {
        let lowered = key.trim().to_lowercase();
        let normalized = lowered
            .strip_suffix("_handles")
            .unwrap_or(lowered.as_str())
            .replace([' ', '.', '-'], "");
        match normalized.as_str() {
            "instagram" | "ig" => PlatformId::Instagram,
            "tiktok" => PlatformId::TikTok,
            "twitter" | "x" => PlatformId::Twitter,
            "youtube" | "yt" => PlatformId::YouTube,
            "linkedin" => PlatformId::LinkedIn,
            "snapchat" | "snap" => PlatformId::Snapchat,
            "facebook" | "fb" => PlatformId::Facebook,
            "twitch" => PlatformId::Twitch,
            "discord" => PlatformId::Discord,
            "threads" => PlatformId::Threads,
            "bereal" => PlatformId::BeReal,
            "vsco" => PlatformId::Vsco,
            _ => PlatformId::Custom(normalized),
        }
    }

    /// Canonical lowercase key, used for YAML/JSON map keys.
    pub fn key(&self) -> &str {
        match self {
            PlatformId::Instagram => "instagram",
            PlatformId::TikTok => "tiktok",
            PlatformId::Twitter => "twitter",
            PlatformId::YouTube => "youtube",
            PlatformId::LinkedIn => "linkedin",
            PlatformId::Snapchat => "snapchat",
            PlatformId::Facebook => "facebook",
            PlatformId::Twitch => "twitch",
            PlatformId::Discord => "discord",
            PlatformId::Threads => "threads",
            PlatformId::BeReal => "bereal",
            PlatformId::Vsco => "vsco",
            PlatformId::Custom(name) => name,
        }
    }

    /// Human-facing display name for reports.
    pub fn label(&self) -> String {
        match self {
            PlatformId::Instagram => "Instagram".to_string(),
            PlatformId::TikTok => "TikTok".to_string(),
            PlatformId::Twitter => "Twitter/X".to_string(),
            PlatformId::YouTube => "YouTube".to_string(),
            PlatformId::LinkedIn => "LinkedIn".to_string(),
            PlatformId::Snapchat => "Snapchat".to_string(),
            PlatformId::Facebook => "Facebook".to_string(),
            PlatformId::Twitch => "Twitch".to_string(),
            PlatformId::Discord => "Discord".to_string(),
            PlatformId::Threads => "Threads".to_string(),
            PlatformId::BeReal => "BeReal".to_string(),
            PlatformId::Vsco => "VSCO".to_string(),
            PlatformId::Custom(name) => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }

    /// Gaming-tagged platforms draw extra scrutiny from recruiters.
    pub fn is_gaming(&self) -> bool {
        matches!(self, PlatformId::Twitch | PlatformId::Discord)
    }

    pub fn is_professional(&self) -> bool {
        matches!(self, PlatformId::LinkedIn)
    }

    pub fn is_casual(&self) -> bool {
        matches!(self, PlatformId::Snapchat | PlatformId::BeReal)
    }

    /// The platforms recruiters check first.
    pub fn is_major(&self) -> bool {
        matches!(
            self,
            PlatformId::Instagram | PlatformId::Twitter | PlatformId::TikTok
        )
    }

    /// Whether the built-in weight table has an entry for this platform.
    pub fn is_known(&self) -> bool {
        !matches!(self, PlatformId::Custom(_))
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PlatformId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlatformId::from_key(s))
    }
}

impl Serialize for PlatformId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for PlatformId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(PlatformId::from_key(&key))
    }
}

/// Audit depth. Deeper levels surface more insight categories; the numeric
/// scores are identical at every level so results stay comparable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AuditLevel {
    Quick,
    #[default]
    Standard,
    DeepDive,
    RecruitmentReady,
}

impl AuditLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLevel::Quick => "quick",
            AuditLevel::Standard => "standard",
            AuditLevel::DeepDive => "deep-dive",
            AuditLevel::RecruitmentReady => "recruitment-ready",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditLevel {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "quick" => Ok(AuditLevel::Quick),
            "standard" => Ok(AuditLevel::Standard),
            "deep-dive" | "deepdive" => Ok(AuditLevel::DeepDive),
            "recruitment-ready" | "recruitmentready" => Ok(AuditLevel::RecruitmentReady),
            _ => Err(AuditError::UnknownAuditLevel(s.to_string())),
        }
    }
}

/// The caller-owned handle inventory: platform -> ordered handle list.
///
/// A platform absent from the map or mapped to an empty list is inactive.
/// Handles are caller-trimmed; the engine only borrows the inventory and
/// never mutates it. BTreeMap keeps iteration order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleInventory {
    pub platforms: BTreeMap<PlatformId, Vec<String>>,
}

impl HandleInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle to a platform, creating the entry on first use.
    pub fn add(&mut self, platform: PlatformId, handle: impl Into<String>) {
        self.platforms.entry(platform).or_default().push(handle.into());
    }

    /// Platforms with at least one handle, in deterministic order.
    pub fn active_platforms(&self) -> impl Iterator<Item = (&PlatformId, &Vec<String>)> {
        self.platforms.iter().filter(|(_, handles)| !handles.is_empty())
    }

    pub fn active_platform_count(&self) -> usize {
        self.active_platforms().count()
    }

    pub fn total_handle_count(&self) -> usize {
        self.platforms.values().map(|handles| handles.len()).sum()
    }

    pub fn is_active(&self, platform: &PlatformId) -> bool {
        self.platforms
            .get(platform)
            .is_some_and(|handles| !handles.is_empty())
    }

    /// Every handle in platform iteration order. The first entry is the
    /// consistency baseline.
    pub fn handles_in_order(&self) -> Vec<&str> {
        self.active_platforms()
            .flat_map(|(_, handles)| handles.iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total_handle_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse_canonical() {
        assert_eq!(PlatformId::from_key("instagram"), PlatformId::Instagram);
        assert_eq!(PlatformId::from_key("TikTok"), PlatformId::TikTok);
        assert_eq!(PlatformId::from_key("vsco"), PlatformId::Vsco);
    }

    #[test]
    fn test_platform_parse_aliases() {
        assert_eq!(PlatformId::from_key("x"), PlatformId::Twitter);
        assert_eq!(PlatformId::from_key("IG"), PlatformId::Instagram);
        assert_eq!(PlatformId::from_key("yt"), PlatformId::YouTube);
        assert_eq!(PlatformId::from_key("fb"), PlatformId::Facebook);
        assert_eq!(PlatformId::from_key("be real"), PlatformId::BeReal);
    }

    #[test]
    fn test_platform_parse_legacy_suffix() {
        assert_eq!(
            PlatformId::from_key("instagram_handles"),
            PlatformId::Instagram
        );
    }

    #[test]
    fn test_platform_parse_unknown_becomes_custom() {
        assert_eq!(
            PlatformId::from_key("Mastodon"),
            PlatformId::Custom("mastodon".to_string())
        );
        assert!(!PlatformId::from_key("mastodon").is_known());
    }

    #[test]
    fn test_platform_tags() {
        assert!(PlatformId::Twitch.is_gaming());
        assert!(PlatformId::Discord.is_gaming());
        assert!(PlatformId::LinkedIn.is_professional());
        assert!(PlatformId::Snapchat.is_casual());
        assert!(PlatformId::BeReal.is_casual());
        assert!(PlatformId::Instagram.is_major());
        assert!(!PlatformId::LinkedIn.is_major());
    }

    #[test]
    fn test_platform_serde_as_map_key() {
        let mut map: BTreeMap<PlatformId, u32> = BTreeMap::new();
        map.insert(PlatformId::Instagram, 10);
        let yaml = serde_saphyr::to_string(&map).unwrap();
        assert!(yaml.contains("instagram"));
        let parsed: BTreeMap<PlatformId, u32> = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed.get(&PlatformId::Instagram), Some(&10));
    }

    #[test]
    fn test_custom_platform_label() {
        assert_eq!(PlatformId::from_key("mastodon").label(), "Mastodon");
        assert_eq!(PlatformId::Twitter.label(), "Twitter/X");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("quick".parse::<AuditLevel>().unwrap(), AuditLevel::Quick);
        assert_eq!(
            "Deep-Dive".parse::<AuditLevel>().unwrap(),
            AuditLevel::DeepDive
        );
        assert_eq!(
            "recruitment_ready".parse::<AuditLevel>().unwrap(),
            AuditLevel::RecruitmentReady
        );
    }

    #[test]
    fn test_level_parse_unknown_is_error() {
        let err = "casual".parse::<AuditLevel>().unwrap_err();
        assert!(err.to_string().contains("unknown audit level"));
    }

    #[test]
    fn test_level_ordering_for_gating() {
        assert!(AuditLevel::Quick < AuditLevel::Standard);
        assert!(AuditLevel::Standard < AuditLevel::DeepDive);
        assert!(AuditLevel::DeepDive < AuditLevel::RecruitmentReady);
    }

    #[test]
    fn test_inventory_counts() {
        let mut inv = HandleInventory::new();
        inv.add(PlatformId::Instagram, "@jordan");
        inv.add(PlatformId::Instagram, "@jordan.hoops");
        inv.add(PlatformId::TikTok, "@jordanhoops");
        inv.platforms.insert(PlatformId::Twitch, vec![]);

        assert_eq!(inv.active_platform_count(), 2);
        assert_eq!(inv.total_handle_count(), 3);
        assert!(inv.is_active(&PlatformId::Instagram));
        assert!(!inv.is_active(&PlatformId::Twitch));
        assert!(!inv.is_active(&PlatformId::YouTube));
    }

    #[test]
    fn test_handles_in_order_is_deterministic() {
        let mut inv = HandleInventory::new();
        inv.add(PlatformId::TikTok, "@b");
        inv.add(PlatformId::Instagram, "@a");
        // Instagram sorts before TikTok in declaration order
        assert_eq!(inv.handles_in_order(), vec!["@a", "@b"]);
    }

    #[test]
    fn test_empty_inventory() {
        let inv = HandleInventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.active_platform_count(), 0);
        assert_eq!(inv.handles_in_order().len(), 0);
    }

    #[test]
    fn test_inventory_parse_from_yaml() {
        let yaml = r#"
instagram: ["@jordan"]
x: ["@jordanhoops"]
"#;
        let inv: HandleInventory = serde_saphyr::from_str(yaml).unwrap();
        assert!(inv.is_active(&PlatformId::Instagram));
        assert!(inv.is_active(&PlatformId::Twitter));
        assert_eq!(inv.total_handle_count(), 2);
    }
}
