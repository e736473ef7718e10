use crate::inventory::{AuditLevel, HandleInventory, PlatformId};
use crate::probe::ProbeReport;

/// Risk and recommendation lists are capped so the report stays scannable.
pub const MAX_RISKS: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 3;

const LOW_PRESENCE_POOL: &[&str] = &[
    "Add one or two major platforms before worrying about posting cadence.",
    "Claim matching handles on Instagram and TikTok even if you post rarely.",
    "Start with the platform your sport's audience uses most and post weekly.",
    "Cross-link the profiles you do have so followers can find every account.",
];

const STEADY_STATE_POOL: &[&str] = &[
    "Keep posting cadence steady; consistency beats volume.",
    "Audit old posts on every platform before recruiting season.",
    "Use the same profile photo and bio across platforms.",
    "Pin your best highlight content to the top of each profile.",
    "Review tagged photos and comments monthly, not just your own posts.",
];

const CONSOLIDATION_POOL: &[&str] = &[
    "Consolidate overlapping accounts; every platform is surface you must manage.",
    "Retire accounts you have not posted to in six months.",
    "Focus effort on your three strongest platforms and let the rest idle publicly clean.",
    "Set up a link-in-bio page instead of maintaining every network by hand.",
];

/// Structural red-flag scan, in fixed order: account sprawl per platform,
/// then gaming-platform presence, then professional/casual tone mismatch.
/// Capped at `MAX_RISKS`, so earlier checks win when many fire.
pub fn collect_risks(inventory: &HandleInventory) -> Vec<String> {
    let mut risks = Vec::new();

    for (platform, handles) in inventory.active_platforms() {
        if handles.len() > 2 {
            risks.push(format!(
                "{} {} accounts may dilute engagement and confuse your audience.",
                handles.len(),
                platform.label()
            ));
        }
    }

    let gaming: Vec<String> = inventory
        .active_platforms()
        .filter(|(platform, _)| platform.is_gaming())
        .map(|(platform, _)| platform.label())
        .collect();
    if !gaming.is_empty() {
        risks.push(format!(
            "Gaming platforms ({}) draw extra scrutiny from coaches and recruiters; streams and chat history are archived.",
            gaming.join(", ")
        ));
    }

    let has_professional = inventory
        .active_platforms()
        .any(|(platform, _)| platform.is_professional());
    let casual: Vec<String> = inventory
        .active_platforms()
        .filter(|(platform, _)| platform.is_casual())
        .map(|(platform, _)| platform.label())
        .collect();
    if has_professional && !casual.is_empty() {
        risks.push(format!(
            "Mixing LinkedIn with casual platforms ({}) can send conflicting tone signals to recruiters.",
            casual.join(", ")
        ));
    }

    risks.truncate(MAX_RISKS);
    risks
}

/// Platform-pair and breadth rules, evaluated in fixed order. Every matching
/// insight is included; the audit level only gates which categories appear,
/// never the numeric scores.
pub fn collect_insights(
    inventory: &HandleInventory,
    level: AuditLevel,
    probe: Option<&ProbeReport>,
) -> Vec<String> {
    let mut insights = Vec::new();
    let active = inventory.active_platform_count();

    // Platform-gap rules, shown at every level.
    if inventory.is_active(&PlatformId::TikTok) && !inventory.is_active(&PlatformId::YouTube) {
        insights.push(
            "Strong short-form presence on TikTok; repurposing clips to YouTube would add long-form reach."
                .to_string(),
        );
    }
    if active < 3 {
        insights.push(format!(
            "Only {} active platform{}; expanding to one or two more would widen your audience.",
            active,
            if active == 1 { "" } else { "s" }
        ));
    }
    if !inventory
        .active_platforms()
        .any(|(platform, _)| platform.is_major())
    {
        insights.push(
            "No presence on Instagram, Twitter/X, or TikTok; recruiters usually check at least one major platform."
                .to_string(),
        );
    }

    if level >= AuditLevel::Standard
        && inventory.is_active(&PlatformId::LinkedIn)
        && !inventory.is_active(&PlatformId::Facebook)
    {
        insights.push(
            "LinkedIn presence without Facebook reads as career-focused; recruiters respond well to that."
                .to_string(),
        );
    }

    if level >= AuditLevel::DeepDive {
        if let Some(report) = probe {
            for outcome in report.inaccessible_in(inventory) {
                insights.push(format!(
                    "{} on {} could not be verified publicly; confirm the handle is correct and the profile is public.",
                    outcome.handle,
                    outcome.platform.label()
                ));
            }
        }
    }

    if level >= AuditLevel::RecruitmentReady {
        match inventory.platforms.get(&PlatformId::LinkedIn) {
            Some(handles) if handles.len() == 1 => insights.push(
                "A single LinkedIn profile is ideal for recruitment visibility.".to_string(),
            ),
            Some(handles) if !handles.is_empty() => {}
            _ => insights.push(
                "No LinkedIn profile; recruiters and NIL partners expect one by junior year."
                    .to_string(),
            ),
        }
    }

    insights
}

/// Pick up to three recommendations from the pool matching the active
/// platform count. Selection rotates through the pool starting at
/// `seed % len`, so a given seed always yields the same picks.
pub fn recommendations(active_platforms: usize, seed: u64) -> Vec<String> {
    let pool = if active_platforms < 3 {
        LOW_PRESENCE_POOL
    } else if active_platforms > 8 {
        CONSOLIDATION_POOL
    } else {
        STEADY_STATE_POOL
    };

    let start = (seed as usize) % pool.len();
    (0..MAX_RECOMMENDATIONS.min(pool.len()))
        .map(|i| pool[(start + i) % pool.len()].to_string())
        .collect()
}
