//! # Advisor Crate
//!
//! Batch orchestration for the recommendation engine: run the engine
//! once per catalog dataset against a shared memory budget, and enrich
//! each result with the dataset's identity for presentation.

pub mod batch;

pub use batch::{BatchAdvisor, DatasetAssessment};
