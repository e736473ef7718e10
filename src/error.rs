use thiserror::Error;

/// Errors the scoring core can report to its caller.
///
/// The engine either completes fully or fails atomically before producing
/// any partial result. Unknown platforms are deliberately NOT represented
/// here; they fall back to the default weight.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The inventory failed validation before scoring started.
    /// Carries every violation found, one per line.
    #[error("invalid input:\n{0}")]
    InvalidInput(String),

    /// An audit level string that matches none of the known depth levels.
    #[error("unknown audit level '{0}' (expected quick, standard, deep-dive, or recruitment-ready)")]
    UnknownAuditLevel(String),
}

impl AuditError {
    /// Build an `InvalidInput` from a list of validation messages.
    pub fn invalid_input(errors: Vec<String>) -> Self {
        AuditError::InvalidInput(
            errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = AuditError::invalid_input(vec!["first".to_string(), "second".to_string()]);
        let text = err.to_string();
        assert!(text.contains("invalid input"));
        assert!(text.contains("  - first"));
        assert!(text.contains("  - second"));
    }

    #[test]
    fn test_unknown_level_names_the_value() {
        let err = AuditError::UnknownAuditLevel("casual".to_string());
        assert!(err.to_string().contains("'casual'"));
    }
}
