pub mod config;
pub mod engine;
pub mod insights;
pub mod risk;
pub mod validation;
pub mod weights;

pub use config::ScoringConfig;
pub use engine::{score, score_with_probe, PlatformAnalysis, Priority, ScoringResult};
pub use risk::RiskLevel;
pub use validation::{validate_inventory, validate_scoring};
pub use weights::WeightTable;
