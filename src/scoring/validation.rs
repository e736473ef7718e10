use crate::inventory::HandleInventory;
use crate::scoring::config::ScoringConfig;

/// Validate a handle inventory before scoring.
/// Returns all violations at once (not just the first).
///
/// Handles are caller-trimmed non-empty strings; anything else here is a
/// broken caller contract and the audit aborts before any partial result.
pub fn validate_inventory(inventory: &HandleInventory) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (platform, handles) in &inventory.platforms {
        for (i, handle) in handles.iter().enumerate() {
            if handle.trim().is_empty() {
                errors.push(format!("handles.{}[{}]: handle is empty", platform, i));
            } else if handle != handle.trim() {
                errors.push(format!(
                    "handles.{}[{}]: handle '{}' has leading or trailing whitespace",
                    platform, i, handle
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(default_weight) = config.default_weight {
        if default_weight == 0 {
            errors.push("scoring.default_weight: must be positive".to_string());
        }
    }

    if let Some(weights) = &config.weights {
        for (platform, weight) in weights {
            if *weight == 0 {
                errors.push(format!("scoring.weights.{}: must be positive", platform));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
