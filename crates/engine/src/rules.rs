//! The algorithm selection table.
//!
//! Selection is an ordered list of `(predicate, plan)` rules evaluated
//! top-down; the first match wins. Size bands come first, then the
//! precision and density sub-branches inside a band, so the bands never
//! overlap. Only the extreme band consults the partitioning decision.
//!
//! The thresholds live here as plain data, calibrated against the
//! reference experiments; extending the table with a new band means
//! adding a row, not a branch.

use crate::metrics::DerivedMetrics;
use crate::types::{ConvergenceEstimate, PerformanceTier};

// Band ceilings (exclusive), ascending
pub const SMALL_NODE_CEILING: u64 = 100_000;
pub const MEDIUM_NODE_CEILING: u64 = 1_000_000;
pub const LARGE_NODE_CEILING: u64 = 10_000_000;
pub const EXTRA_LARGE_NODE_CEILING: u64 = 50_000_000;

// Density cuts (exclusive floors) inside the medium band
pub const HIGH_DENSITY_FLOOR: f64 = 30.0;
pub const MEDIUM_DENSITY_FLOOR: f64 = 15.0;

/// The fixed outcome tuple assigned by one leaf of the decision table.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmPlan {
    pub algorithm: &'static str,
    pub framework: &'static str,
    pub tier: PerformanceTier,
    pub rationale: &'static str,
    pub expected_time_range: Option<&'static str>,
    pub throughput_mteps: Option<u32>,
    pub convergence: Option<ConvergenceEstimate>,
    /// Named fallbacks, closest first
    pub alternatives: &'static [&'static str],
}

/// One row of the selection table: a conjunctive predicate over the
/// derived metrics, plus the plan it assigns.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRule {
    /// Stable identifier, used for logging and tests
    pub label: &'static str,
    /// Band ceiling on the node count (exclusive); `None` is unbounded
    pub max_nodes: Option<u64>,
    /// Only match high-precision requests
    pub requires_high_precision: bool,
    /// Density floor (exclusive)
    pub min_density: Option<f64>,
    /// Only match when the footprint exceeds the memory budget
    pub requires_partitioning: bool,
    pub plan: AlgorithmPlan,
}

impl SelectionRule {
    /// Whether this rule's predicate holds for the given metrics
    pub fn applies(&self, metrics: &DerivedMetrics) -> bool {
        if let Some(ceiling) = self.max_nodes {
            if metrics.node_count >= ceiling {
                return false;
            }
        }
        if self.requires_high_precision && !metrics.high_precision {
            return false;
        }
        if let Some(floor) = self.min_density {
            if metrics.density <= floor {
                return false;
            }
        }
        if self.requires_partitioning && !metrics.partitioning_required {
            return false;
        }
        true
    }
}

/// The selection table, evaluated top-down. The final row matches
/// unconditionally, so every input lands somewhere.
pub static SELECTION_RULES: [SelectionRule; 10] = [
    SelectionRule {
        label: "small_high_precision",
        max_nodes: Some(SMALL_NODE_CEILING),
        requires_high_precision: true,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Hessen Method",
            framework: "Custom Upper-Hessenberg Implementation",
            tier: PerformanceTier::Highest,
            rationale: "Small graph with a strict tolerance: the upper-Hessenberg reduction \
                        converged in 12 iterations on Slashdot0902 where power iteration needed 825",
            expected_time_range: Some("< 1s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Iterations { min: 12, max: 20 }),
            alternatives: &["Power Method", "GMRES", "Jacobi Method"],
        },
    },
    SelectionRule {
        label: "small_standard",
        max_nodes: Some(SMALL_NODE_CEILING),
        requires_high_precision: false,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Power Method",
            framework: "cuGraph",
            tier: PerformanceTier::High,
            rationale: "Small graph at standard precision: cuGraph's tuned power iteration \
                        gives quick turnaround with proven stability",
            expected_time_range: Some("< 0.5s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Iterations { min: 200, max: 800 }),
            alternatives: &["Hessen Method", "Gauss-Seidel Method", "Aitken Extrapolation"],
        },
    },
    SelectionRule {
        label: "medium_high_precision",
        max_nodes: Some(MEDIUM_NODE_CEILING),
        requires_high_precision: true,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "GMRES",
            framework: "CUSP Library + GPU",
            tier: PerformanceTier::High,
            rationale: "Mid-scale graph with a strict tolerance: Krylov subspace restarts keep \
                        the residual shrinking where stationary sweeps stall",
            expected_time_range: Some("2-6s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Iterations { min: 30, max: 120 }),
            alternatives: &["Hessen Method", "BiCGStab", "Power Method"],
        },
    },
    SelectionRule {
        label: "medium_high_density",
        max_nodes: Some(MEDIUM_NODE_CEILING),
        requires_high_precision: false,
        min_density: Some(HIGH_DENSITY_FLOOR),
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Gauss-Seidel Method",
            framework: "Custom GPU Implementation",
            tier: PerformanceTier::VeryHigh,
            rationale: "Dense mid-scale graph: Gauss-Seidel sweeps converge 40-45% faster than \
                        power iteration on Orkut-class adjacency structure",
            expected_time_range: Some("2-5s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Iterations { min: 100, max: 300 }),
            alternatives: &[
                "BiCGStab",
                "Power Method with ILU Preconditioner",
                "Weighted Jacobi",
            ],
        },
    },
    SelectionRule {
        label: "medium_mid_density",
        max_nodes: Some(MEDIUM_NODE_CEILING),
        requires_high_precision: false,
        min_density: Some(MEDIUM_DENSITY_FLOOR),
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "BiCGStab",
            framework: "CUSP Library + GPU",
            tier: PerformanceTier::High,
            rationale: "Mid-density graph: BiCGStab balances memory efficiency against steady \
                        Krylov-subspace convergence",
            expected_time_range: Some("3-8s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Iterations { min: 50, max: 200 }),
            alternatives: &["GMRES", "Conjugate Gradient", "Arnoldi Iteration"],
        },
    },
    SelectionRule {
        label: "medium_low_density",
        max_nodes: Some(MEDIUM_NODE_CEILING),
        requires_high_precision: false,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Hessen Method",
            framework: "Custom Upper-Hessenberg Implementation",
            tier: PerformanceTier::Highest,
            rationale: "Sparse mid-scale graph: WikiTalk-class graphs reach convergence in a \
                        handful of Hessenberg iterations",
            expected_time_range: Some("1-3s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Iterations { min: 20, max: 50 }),
            alternatives: &["Power Method", "GMRES", "Weighted Arnoldi"],
        },
    },
    SelectionRule {
        label: "large",
        max_nodes: Some(LARGE_NODE_CEILING),
        requires_high_precision: false,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Static PageRank (Push-Pull)",
            framework: "Gunrock GPU Framework",
            tier: PerformanceTier::VeryHigh,
            rationale: "Large graph: push-pull traversal sustained 1,077 MTEPS on Pokec and \
                        1,032 MTEPS on LiveJournal with near-linear scaling",
            expected_time_range: Some("8-20s"),
            throughput_mteps: Some(1000),
            convergence: Some(ConvergenceEstimate::Iterations { min: 50, max: 150 }),
            alternatives: &[
                "cuGraph PageRank",
                "Dynamic Frontier PageRank",
                "Power Method on GPU",
            ],
        },
    },
    SelectionRule {
        label: "extra_large",
        max_nodes: Some(EXTRA_LARGE_NODE_CEILING),
        requires_high_precision: false,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Dynamic Frontier PageRank (DF-P)",
            framework: "Custom GPU",
            tier: PerformanceTier::Highest,
            rationale: "Very large graph: frontier-driven updates averaged 1,060+ MTEPS on \
                        Twitter-2010, 5.9x over Gunrock and 31x over Hornet",
            expected_time_range: Some("60-180s"),
            throughput_mteps: Some(1100),
            convergence: Some(ConvergenceEstimate::Dynamic),
            alternatives: &[
                "Static PageRank with Heavy Partitioning",
                "Distributed Gunrock",
                "Asynchronous PageRank",
            ],
        },
    },
    SelectionRule {
        label: "extreme_memory_bound",
        max_nodes: None,
        requires_high_precision: false,
        min_density: None,
        requires_partitioning: true,
        plan: AlgorithmPlan {
            algorithm: "Monte Carlo PageRank",
            framework: "Custom GPU + Random Walk",
            tier: PerformanceTier::MediumHigh,
            rationale: "Extreme scale over the memory budget: random-walk sampling cuts the \
                        resident footprint sharply at the cost of an approximate solution",
            expected_time_range: Some("180-600s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::SamplingBased),
            alternatives: &["Reduced Precision PageRank", "Block-Jacobi with Partitioning"],
        },
    },
    SelectionRule {
        label: "extreme",
        max_nodes: None,
        requires_high_precision: false,
        min_density: None,
        requires_partitioning: false,
        plan: AlgorithmPlan {
            algorithm: "Distributed Block-Jacobi PageRank",
            framework: "Multi-GPU + MPI + NCCL",
            tier: PerformanceTier::High,
            rationale: "Extreme scale: block-Jacobi distribution across accelerators keeps \
                        communication cost low while retaining throughput",
            expected_time_range: Some("300-900s"),
            throughput_mteps: None,
            convergence: Some(ConvergenceEstimate::Asynchronous),
            alternatives: &["GraphX on Spark", "Pregel-based Systems", "Streaming PageRank"],
        },
    },
];

/// Pick the first rule whose predicate holds. The table's unconditional
/// final row makes this total.
pub fn select_rule(metrics: &DerivedMetrics) -> &'static SelectionRule {
    SELECTION_RULES
        .iter()
        .find(|rule| rule.applies(metrics))
        .unwrap_or(&SELECTION_RULES[SELECTION_RULES.len() - 1])
}
