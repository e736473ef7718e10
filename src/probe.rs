use anyhow::Result;

use crate::inventory::{HandleInventory, PlatformId};

/// Outcome of a best-effort public profile check for one handle.
///
/// Profile pages are unreliable to check (rate limits, login walls, markup
/// churn), so an outcome is only ever a supplementary signal: inaccessible
/// handles add a verification insight, and accessible or missing data is
/// neutral. Probe results never change any numeric score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub platform: PlatformId,
    pub handle: String,
    pub accessible: bool,
}

/// Collected probe outcomes for one inventory.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    pub outcomes: Vec<ProbeOutcome>,
}

impl ProbeReport {
    /// Outcomes for handles that could not be reached, limited to handles
    /// actually present in the inventory. Stale probe data for handles the
    /// caller has since removed is ignored.
    pub fn inaccessible_in<'a>(
        &'a self,
        inventory: &'a HandleInventory,
    ) -> impl Iterator<Item = &'a ProbeOutcome> {
        self.outcomes.iter().filter(|outcome| {
            !outcome.accessible
                && inventory
                    .platforms
                    .get(&outcome.platform)
                    .is_some_and(|handles| handles.iter().any(|h| h == &outcome.handle))
        })
    }
}

/// A collaborator that checks whether profiles are publicly reachable.
///
/// Implementations may fail wholesale; callers treat any error as "no probe
/// data" and audit without it.
pub trait ProfileProbe {
    fn probe(&self, inventory: &HandleInventory) -> Result<ProbeReport>;
}
