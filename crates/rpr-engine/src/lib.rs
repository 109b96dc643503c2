pub mod engine;
pub mod repository;

pub use crate::engine::{EditEngine, EngineError, SubmissionOutcome};
pub use crate::repository::{DecisionDatasetRepository, InMemoryDatasetRepository};
