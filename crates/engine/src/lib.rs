//! # Engine Crate
//!
//! This crate implements the PageRank strategy recommendation engine.
//!
//! ## Components
//!
//! ### Rule table
//! Algorithm selection is an ordered list of `(predicate, plan)` rules
//! evaluated top-down; the first matching rule wins. Size bands are checked
//! before density and precision, so the bands stay non-overlapping.
//!
//! ### Adjustments
//! Two post-selection adjustments run in a fixed order:
//! 1. Directedness: undirected graphs are demoted one performance tier and
//!    pick up an extra alternative below the mid-scale threshold
//! 2. Precision: strict tolerances widen the expected iteration range
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{recommend, GraphDescriptor, DEFAULT_MEMORY_LIMIT_GB};
//!
//! let graph = GraphDescriptor::new(1_632_803, 30_622_564, true)
//!     .with_tolerance(1e-6);
//!
//! let rec = recommend(&graph, DEFAULT_MEMORY_LIMIT_GB)?;
//! println!("{} via {}", rec.algorithm, rec.framework);
//! ```
//!
//! Every call is independent: the engine holds no state, performs no I/O,
//! and is safe to invoke from any number of callers concurrently.

pub mod error;
pub mod guide;
pub mod metrics;
pub mod reasoning;
pub mod recommend;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use metrics::{DerivedMetrics, estimated_memory_gb, graph_density};
pub use recommend::recommend;
pub use types::{
    ConvergenceEstimate, DEFAULT_MEMORY_LIMIT_GB, GraphDescriptor, PerformanceTier,
    Recommendation, RecommendationRequest,
};
