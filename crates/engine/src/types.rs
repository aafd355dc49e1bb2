//! Core domain types for the recommendation engine.
//!
//! This module defines the caller-supplied graph descriptor, the
//! recommendation record returned per call, and the small enums the
//! adjustment passes operate on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default accelerator memory budget in GB, matching the reference
/// experiment environment.
pub const DEFAULT_MEMORY_LIMIT_GB: f64 = 20.0;

/// Scale factors applied to a numeric iteration range when the caller
/// requests high precision.
const PRECISION_MIN_SCALE: f64 = 1.5;
const PRECISION_MAX_SCALE: f64 = 2.0;

// =============================================================================
// Input Types
// =============================================================================

/// Coarse statistics describing a graph's shape, without any graph data.
///
/// Node and edge counts are not required to be mutually consistent; the
/// engine only does arithmetic on them, never structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    pub node_count: u64,
    pub edge_count: u64,
    pub directed: bool,
    /// Convergence threshold; `None` means standard precision
    pub tolerance: Option<f64>,
}

impl GraphDescriptor {
    /// Create a descriptor with no tolerance set (standard precision)
    pub fn new(node_count: u64, edge_count: u64, directed: bool) -> Self {
        Self {
            node_count,
            edge_count,
            directed,
            tolerance: None,
        }
    }

    /// Set the convergence tolerance (builder pattern)
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
}

/// A graph descriptor paired with the caller's memory budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub descriptor: GraphDescriptor,
    pub memory_limit_gb: f64,
}

impl RecommendationRequest {
    /// Create a request with the default memory budget
    pub fn new(descriptor: GraphDescriptor) -> Self {
        Self {
            descriptor,
            memory_limit_gb: DEFAULT_MEMORY_LIMIT_GB,
        }
    }

    /// Override the memory budget (builder pattern)
    pub fn with_memory_limit(mut self, memory_limit_gb: f64) -> Self {
        self.memory_limit_gb = memory_limit_gb;
        self
    }

    /// Run the engine on this request
    pub fn evaluate(&self) -> crate::error::Result<Recommendation> {
        crate::recommend::recommend(&self.descriptor, self.memory_limit_gb)
    }
}

// =============================================================================
// Performance Tier
// =============================================================================

/// Ordered qualitative performance label attached to a recommendation.
///
/// Variants are declared in ascending order so the derived `Ord` matches
/// the domain ordering: `Medium < MediumHigh < High < VeryHigh < Highest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Medium,
    MediumHigh,
    High,
    VeryHigh,
    Highest,
}

impl PerformanceTier {
    /// Move one step down the scale, clamped at the bottom.
    ///
    /// Used by the undirected-graph adjustment instead of rewriting label
    /// strings.
    pub fn demote(self) -> Self {
        match self {
            Self::Highest => Self::VeryHigh,
            Self::VeryHigh => Self::High,
            Self::High => Self::MediumHigh,
            Self::MediumHigh | Self::Medium => Self::Medium,
        }
    }

    /// Human-readable label for table and badge rendering
    pub fn label(&self) -> &'static str {
        match self {
            Self::Highest => "Highest",
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::MediumHigh => "Medium-High",
            Self::Medium => "Medium",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Convergence Estimate
// =============================================================================

/// Expected convergence behavior for a recommended algorithm.
///
/// Numeric ranges widen under the high-precision adjustment; the
/// qualitative variants pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergenceEstimate {
    /// A literal min-max iteration count
    Iterations { min: u32, max: u32 },
    /// Probabilistic methods converge by sample count, not iteration count
    SamplingBased,
    /// Frontier-driven methods converge when the frontier empties
    Dynamic,
    /// Distributed methods converge asynchronously per block
    Asynchronous,
}

impl ConvergenceEstimate {
    /// Widen a numeric range to reflect the extra iterations a strict
    /// tolerance demands: lower bound x1.5, upper bound x2, rounded.
    pub fn widen_for_precision(self) -> Self {
        match self {
            Self::Iterations { min, max } => Self::Iterations {
                min: (min as f64 * PRECISION_MIN_SCALE).round() as u32,
                max: (max as f64 * PRECISION_MAX_SCALE).round() as u32,
            },
            other => other,
        }
    }
}

impl fmt::Display for ConvergenceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iterations { min, max } => write!(f, "{}-{} iterations", min, max),
            Self::SamplingBased => f.write_str("sampling-based"),
            Self::Dynamic => f.write_str("dynamic"),
            Self::Asynchronous => f.write_str("asynchronous"),
        }
    }
}

// =============================================================================
// Output Type
// =============================================================================

/// The recommendation record returned by one engine call.
///
/// Every field is computed fresh inside `recommend`; the caller owns the
/// result. `partition_count` is `Some` if and only if
/// `partitioning_required` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Canonical name of the recommended method
    pub algorithm: String,
    /// Implementation/library context for the method (descriptive only)
    pub framework: String,
    pub performance_tier: PerformanceTier,
    /// Base rationale followed by zero or more adjustment clauses
    pub reasoning: String,
    /// Estimated footprint in GB, derived only from the edge count
    pub memory_usage_gb: f64,
    /// 1-3 named fallbacks, closest first
    pub alternatives: Vec<String>,
    pub partitioning_required: bool,
    pub partition_count: Option<u32>,
    pub expected_time_range: Option<String>,
    pub estimated_throughput_mteps: Option<u32>,
    pub convergence_iteration_range: Option<String>,
}
