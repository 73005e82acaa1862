//! Strategic decision scoring: criteria weights, the SVI engine, and the
//! seeded scenario catalog, together with the HTTP router exposing them.

pub mod batch;
pub mod catalog;
pub mod domain;
mod error;
pub mod router;
pub mod scoring;
pub mod service;
pub mod weights;

#[cfg(test)]
mod tests;

pub use batch::{BatchImportError, ScenarioCsvImporter};
pub use catalog::ScenarioCatalog;
pub use domain::{Factor, FactorBreakdown, ScenarioInput, ScoringResult, StrategicScenario};
pub use error::ValidationError;
pub use router::decision_router;
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{DecisionServiceError, StrategicDecisionService};
pub use weights::{CriteriaWeights, WeightStore, WEIGHT_SUM_TOLERANCE};
