mod types;

pub use types::{AuditLevel, HandleInventory, PlatformId};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AuditError;

/// On-disk inventory file: who the audit is for, an optional depth level,
/// and the handle lists themselves.
///
/// Example YAML:
/// ```yaml
/// athlete: Jordan Example
/// level: standard
/// handles:
///   instagram: ["@jordan.hoops"]
///   tiktok: ["@jordanhoops"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InventoryFile {
    #[serde(default)]
    pub athlete: Option<String>,

    /// Audit depth as written by the user. Parsed lazily so an unknown
    /// value reports as invalid input, not a YAML error.
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub handles: HandleInventory,
}

impl InventoryFile {
    /// Parse the file's audit level, if one was given.
    pub fn level(&self) -> Result<Option<AuditLevel>, AuditError> {
        self.level.as_deref().map(str::parse).transpose()
    }
}

/// Load an inventory file from disk.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid YAML. Handle contents are validated later by the scoring engine.
pub fn load_inventory(path: &Path) -> Result<InventoryFile> {
    if !path.exists() {
        anyhow::bail!(
            "Inventory file not found at {}. Run `presence-audit init` to create one.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read inventory file at {}", path.display()))?;

    let inventory: InventoryFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse inventory: invalid YAML in {}", path.display()))?;

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_file_parse() {
        let yaml = r#"
athlete: Jordan Example
level: deep-dive
handles:
  instagram: ["@jordan.hoops"]
  tiktok: ["@jordanhoops"]
"#;
        let file: InventoryFile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(file.athlete.as_deref(), Some("Jordan Example"));
        assert_eq!(file.level().unwrap(), Some(AuditLevel::DeepDive));
        assert_eq!(file.handles.total_handle_count(), 2);
    }

    #[test]
    fn test_inventory_file_minimal() {
        let yaml = r#"
handles:
  instagram: ["@jordan"]
"#;
        let file: InventoryFile = serde_saphyr::from_str(yaml).unwrap();
        assert!(file.athlete.is_none());
        assert_eq!(file.level().unwrap(), None);
    }

    #[test]
    fn test_inventory_file_bad_level() {
        let yaml = r#"
level: exhaustive
handles: {}
"#;
        let file: InventoryFile = serde_saphyr::from_str(yaml).unwrap();
        assert!(file.level().is_err());
    }

    #[test]
    fn test_load_inventory_missing_file() {
        let err = load_inventory(Path::new("/nonexistent/inventory.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
