//! Static reference guide for the algorithms the engine recommends.
//!
//! Descriptive only: the entries summarize the experiment results behind
//! the selection table, for presentation next to a recommendation.

use std::fmt;

/// Grouping used when rendering the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmCategory {
    /// Recent research methods built for GPU throughput
    RecentResearch,
    /// Classical stationary iterations
    StationaryNumerical,
    /// Krylov subspace solvers
    KrylovSubspace,
}

impl fmt::Display for AlgorithmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecentResearch => f.write_str("Recent research"),
            Self::StationaryNumerical => f.write_str("Stationary numerical methods"),
            Self::KrylovSubspace => f.write_str("Krylov subspace methods"),
        }
    }
}

/// One guide entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub name: &'static str,
    pub category: AlgorithmCategory,
    pub summary: &'static str,
    /// Headline experiment figure
    pub note: &'static str,
}

/// The guide entries, grouped by category in render order
pub fn algorithm_guide() -> &'static [AlgorithmProfile] {
    &[
        AlgorithmProfile {
            name: "Dynamic Frontier PageRank (DF-P)",
            category: AlgorithmCategory::RecentResearch,
            summary: "Processes only changed vertices; 5.9x faster than Gunrock",
            note: "Twitter-2010: 1,060+ MTEPS",
        },
        AlgorithmProfile {
            name: "Static PageRank (Push-Pull)",
            category: AlgorithmCategory::RecentResearch,
            summary: "Gunrock-based traversal with near-linear scaling",
            note: "Pokec: 1,077 MTEPS, LiveJournal: 1,032 MTEPS",
        },
        AlgorithmProfile {
            name: "Monte Carlo PageRank",
            category: AlgorithmCategory::RecentResearch,
            summary: "Memory-saving probabilistic sampling",
            note: "Approximate solver for over-budget graphs",
        },
        AlgorithmProfile {
            name: "Hessen Method",
            category: AlgorithmCategory::StationaryNumerical,
            summary: "Minimal-iteration convergence, best at high precision",
            note: "Slashdot0902: 12 iterations vs 825 for power iteration",
        },
        AlgorithmProfile {
            name: "Gauss-Seidel Method",
            category: AlgorithmCategory::StationaryNumerical,
            summary: "40-45% faster convergence than power iteration",
            note: "Strongest on dense graphs",
        },
        AlgorithmProfile {
            name: "Power Method",
            category: AlgorithmCategory::StationaryNumerical,
            summary: "Stable, library-supported baseline",
            note: "LiveJournal: 0.64s under cuGraph",
        },
        AlgorithmProfile {
            name: "GMRES",
            category: AlgorithmCategory::KrylovSubspace,
            summary: "Strong convergence on nonsymmetric systems",
            note: "Recommended at strict tolerances",
        },
        AlgorithmProfile {
            name: "BiCGStab",
            category: AlgorithmCategory::KrylovSubspace,
            summary: "Memory-efficient with steady convergence",
            note: "Best fit for mid-density graphs",
        },
        AlgorithmProfile {
            name: "Weighted Arnoldi",
            category: AlgorithmCategory::KrylovSubspace,
            summary: "Eigenvalue-problem formulation",
            note: "Convergence unstable at large scale",
        },
    ]
}
