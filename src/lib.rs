pub mod config;
pub mod error;
pub mod inventory;
pub mod output;
pub mod probe;
pub mod scoring;

pub use error::AuditError;
pub use inventory::{AuditLevel, HandleInventory, PlatformId};
pub use scoring::{score, score_with_probe, RiskLevel, ScoringResult};
