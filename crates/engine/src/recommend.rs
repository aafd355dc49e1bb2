//! The recommendation entry point.
//!
//! `recommend` is a single-pass pure transformation: derive metrics,
//! select a plan from the rule table, then apply the directedness and
//! precision adjustments in that fixed order before assembly. Identical
//! inputs always produce identical output.

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::metrics::{DerivedMetrics, HIGH_PRECISION_TOLERANCE};
use crate::reasoning::{ReasonClause, Reasoning};
use crate::rules::select_rule;
use crate::types::{ConvergenceEstimate, GraphDescriptor, Recommendation};

/// Undirected graphs run about this factor slower than directed ones.
pub const UNDIRECTED_SLOWDOWN_FACTOR: f64 = 1.7;

/// Below this node count, undirected graphs pick up the HITS alternative.
pub const UNDIRECTED_HITS_NODE_CEILING: u64 = 5_000_000;

/// Map a graph descriptor and a memory budget to a recommendation.
///
/// Total and deterministic for every valid input. Fails fast with
/// [`EngineError::InvalidMemoryLimit`] when the budget is zero, negative,
/// or not finite, since no threshold branch is well-defined there.
pub fn recommend(descriptor: &GraphDescriptor, memory_limit_gb: f64) -> Result<Recommendation> {
    if !memory_limit_gb.is_finite() || memory_limit_gb <= 0.0 {
        return Err(EngineError::InvalidMemoryLimit(memory_limit_gb));
    }

    let metrics = DerivedMetrics::compute(descriptor, memory_limit_gb);
    let rule = select_rule(&metrics);
    debug!(
        rule = rule.label,
        density = metrics.density,
        memory_gb = metrics.memory_usage_gb,
        partitioning = metrics.partitioning_required,
        "matched selection rule"
    );

    let plan = &rule.plan;
    let mut tier = plan.tier;
    let mut reasoning = Reasoning::new(plan.rationale);
    let mut alternatives: Vec<String> =
        plan.alternatives.iter().map(|alt| alt.to_string()).collect();
    let mut throughput_mteps = plan.throughput_mteps;
    let mut convergence = plan.convergence;

    // Directedness adjustment
    if !descriptor.directed {
        tier = tier.demote();
        reasoning.push(ReasonClause::UndirectedSlowdown);
        if descriptor.node_count < UNDIRECTED_HITS_NODE_CEILING {
            alternatives.push("HITS Algorithm".to_string());
        }
        if let Some(mteps) = throughput_mteps {
            throughput_mteps = Some((mteps as f64 / UNDIRECTED_SLOWDOWN_FACTOR).round() as u32);
        }
    }

    // Precision adjustment
    if let Some(tolerance) = descriptor.tolerance {
        if tolerance < HIGH_PRECISION_TOLERANCE {
            reasoning.push(ReasonClause::HighPrecision { tolerance });
            convergence = convergence.map(ConvergenceEstimate::widen_for_precision);
        }
    }

    Ok(Recommendation {
        algorithm: plan.algorithm.to_string(),
        framework: plan.framework.to_string(),
        performance_tier: tier,
        reasoning: reasoning.render(),
        memory_usage_gb: metrics.memory_usage_gb,
        alternatives,
        partitioning_required: metrics.partitioning_required,
        partition_count: metrics.partition_count,
        expected_time_range: plan.expected_time_range.map(str::to_string),
        estimated_throughput_mteps: throughput_mteps,
        convergence_iteration_range: convergence.map(|estimate| estimate.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PerformanceTier;

    #[test]
    fn test_rejects_non_positive_memory_limit() {
        let graph = GraphDescriptor::new(1000, 5000, true);
        assert!(recommend(&graph, 0.0).is_err());
        assert!(recommend(&graph, -4.0).is_err());
        assert!(recommend(&graph, f64::NAN).is_err());
        assert!(recommend(&graph, f64::INFINITY).is_err());
    }

    #[test]
    fn test_undirected_demotes_tier_one_step() {
        let directed = GraphDescriptor::new(500_000, 20_000_000, true);
        let undirected = GraphDescriptor::new(500_000, 20_000_000, false);

        let directed_rec = recommend(&directed, 20.0).unwrap();
        let undirected_rec = recommend(&undirected, 20.0).unwrap();

        assert_eq!(directed_rec.performance_tier, PerformanceTier::VeryHigh);
        assert_eq!(undirected_rec.performance_tier, PerformanceTier::High);
        assert!(undirected_rec.reasoning.contains("1.7x slower"));
        assert!(!directed_rec.reasoning.contains("1.7x slower"));
    }

    #[test]
    fn test_undirected_scales_throughput_down() {
        let graph = GraphDescriptor::new(4_847_571, 68_993_773, false);
        let rec = recommend(&graph, 20.0).unwrap();
        // 1000 MTEPS / 1.7, rounded
        assert_eq!(rec.estimated_throughput_mteps, Some(588));
    }

    #[test]
    fn test_undirected_appends_hits_below_mid_scale() {
        let small = GraphDescriptor::new(82_168, 948_464, false);
        let rec = recommend(&small, 20.0).unwrap();
        assert_eq!(rec.alternatives.last().map(String::as_str), Some("HITS Algorithm"));

        // At or above the mid-scale threshold, no HITS
        let big = GraphDescriptor::new(6_000_000, 60_000_000, false);
        let rec = recommend(&big, 20.0).unwrap();
        assert!(!rec.alternatives.iter().any(|alt| alt == "HITS Algorithm"));
    }

    #[test]
    fn test_directed_graphs_never_get_hits() {
        let graph = GraphDescriptor::new(82_168, 948_464, true);
        let rec = recommend(&graph, 20.0).unwrap();
        assert!(!rec.alternatives.iter().any(|alt| alt == "HITS Algorithm"));
    }

    #[test]
    fn test_precision_clause_and_widened_range() {
        let graph = GraphDescriptor::new(500_000, 1_000_000, true).with_tolerance(1e-9);
        let rec = recommend(&graph, 20.0).unwrap();

        assert!(rec.reasoning.contains("1e-9"));
        // GMRES leaf: 30-120 widens to 45-240
        assert_eq!(
            rec.convergence_iteration_range.as_deref(),
            Some("45-240 iterations")
        );
    }

    #[test]
    fn test_precision_leaves_qualitative_ranges_alone() {
        let graph = GraphDescriptor::new(41_652_230, 100_000_000, true).with_tolerance(1e-8);
        let rec = recommend(&graph, 20.0).unwrap();
        assert!(rec.reasoning.contains("1e-8"));
        assert_eq!(rec.convergence_iteration_range.as_deref(), Some("dynamic"));
    }

    #[test]
    fn test_adjustment_clause_order_is_fixed() {
        let graph = GraphDescriptor::new(500_000, 1_000_000, false).with_tolerance(1e-9);
        let rec = recommend(&graph, 20.0).unwrap();

        let undirected_at = rec.reasoning.find("1.7x slower").unwrap();
        let precision_at = rec.reasoning.find("1e-9").unwrap();
        assert!(undirected_at < precision_at);
    }

    #[test]
    fn test_partition_count_present_iff_required() {
        let small = recommend(&GraphDescriptor::new(82_168, 948_464, true), 20.0).unwrap();
        assert!(!small.partitioning_required);
        assert_eq!(small.partition_count, None);

        let huge = recommend(&GraphDescriptor::new(41_652_230, 1_468_365_182, true), 20.0).unwrap();
        assert!(huge.partitioning_required);
        assert_eq!(huge.partition_count, Some(3));
    }

    #[test]
    fn test_empty_graph_is_defined() {
        let rec = recommend(&GraphDescriptor::new(0, 0, true), 20.0).unwrap();
        assert_eq!(rec.memory_usage_gb, 0.0);
        assert!(!rec.partitioning_required);
        // Smallest band, standard precision
        assert_eq!(rec.algorithm, "Power Method");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let graph = GraphDescriptor::new(3_072_441, 117_185_083, false).with_tolerance(1e-6);
        let first = recommend(&graph, 20.0).unwrap();
        let second = recommend(&graph, 20.0).unwrap();
        assert_eq!(first, second);
    }
}
