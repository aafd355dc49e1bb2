//! Derived metrics and the partitioning decision.
//!
//! Everything downstream of the raw descriptor is computed here: density,
//! the estimated memory footprint, the precision flag, and the partition
//! plan. The selection rules consume these values; they never look at the
//! descriptor directly.

use crate::types::GraphDescriptor;

/// Measured per-edge footprint: 0.025 KB per edge.
pub const EDGE_MEMORY_KB: f64 = 0.025;

/// KB per GB for the footprint conversion.
const KB_PER_GB: f64 = 1024.0 * 1024.0;

/// Tolerances below this count as a high-precision request.
pub const HIGH_PRECISION_TOLERANCE: f64 = 1e-7;

/// Each partition is sized to fill this fraction of the memory budget,
/// leaving the remainder as headroom.
pub const PARTITION_FILL_FRACTION: f64 = 0.8;

/// Average edges per node. Zero-node graphs have density zero by policy,
/// not by arithmetic.
pub fn graph_density(node_count: u64, edge_count: u64) -> f64 {
    if node_count == 0 {
        return 0.0;
    }
    edge_count as f64 / node_count as f64
}

/// Estimated memory footprint in GB, a flat per-edge coefficient.
pub fn estimated_memory_gb(edge_count: u64) -> f64 {
    edge_count as f64 * EDGE_MEMORY_KB / KB_PER_GB
}

/// All values the selection rules branch on, computed once per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub node_count: u64,
    pub edge_count: u64,
    /// Average edges per node
    pub density: f64,
    pub memory_usage_gb: f64,
    /// True when a tolerance is present and below the high-precision cut
    pub high_precision: bool,
    pub partitioning_required: bool,
    /// Present if and only if partitioning is required
    pub partition_count: Option<u32>,
}

impl DerivedMetrics {
    /// Compute metrics for a descriptor against a memory budget.
    ///
    /// The partitioning decision is independent of which algorithm the
    /// rules later pick: a dataset over budget is partitioned regardless
    /// of its size band.
    pub fn compute(descriptor: &GraphDescriptor, memory_limit_gb: f64) -> Self {
        let memory_usage_gb = estimated_memory_gb(descriptor.edge_count);
        let partitioning_required = memory_usage_gb > memory_limit_gb;
        let partition_count = partitioning_required.then(|| {
            let per_partition = memory_limit_gb * PARTITION_FILL_FRACTION;
            ((memory_usage_gb / per_partition).ceil() as u32).max(1)
        });

        Self {
            node_count: descriptor.node_count,
            edge_count: descriptor.edge_count,
            density: graph_density(descriptor.node_count, descriptor.edge_count),
            memory_usage_gb,
            high_precision: descriptor
                .tolerance
                .is_some_and(|t| t < HIGH_PRECISION_TOLERANCE),
            partitioning_required,
            partition_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphDescriptor;

    #[test]
    fn test_density_is_edges_per_node() {
        assert_eq!(graph_density(100, 3000), 30.0);
        assert!((graph_density(2_394_385, 5_021_410) - 2.097).abs() < 0.01);
    }

    #[test]
    fn test_density_zero_nodes_is_zero() {
        assert_eq!(graph_density(0, 0), 0.0);
        // Counts need not be mutually consistent
        assert_eq!(graph_density(0, 1_000_000), 0.0);
    }

    #[test]
    fn test_memory_formula() {
        // 948,464 edges at 0.025 KB each is about 0.023 GB
        let gb = estimated_memory_gb(948_464);
        assert!((gb - 0.0226).abs() < 0.001);

        assert_eq!(estimated_memory_gb(0), 0.0);
    }

    #[test]
    fn test_memory_formula_web_scale() {
        // Twitter-2010: 1.47B edges is roughly 35 GB
        let gb = estimated_memory_gb(1_468_365_182);
        assert!((gb - 35.0).abs() < 0.1, "got {gb}");
    }

    #[test]
    fn test_partitioning_not_required_under_budget() {
        let graph = GraphDescriptor::new(82_168, 948_464, true);
        let metrics = DerivedMetrics::compute(&graph, 20.0);
        assert!(!metrics.partitioning_required);
        assert_eq!(metrics.partition_count, None);
    }

    #[test]
    fn test_partitioning_required_over_budget() {
        let graph = GraphDescriptor::new(41_652_230, 1_468_365_182, true);
        let metrics = DerivedMetrics::compute(&graph, 20.0);
        assert!(metrics.partitioning_required);
        // ~35 GB over a 16 GB effective partition size -> 3 partitions
        assert_eq!(metrics.partition_count, Some(3));
    }

    #[test]
    fn test_partitioning_threshold_is_strict() {
        // Footprint exactly at the budget stays unpartitioned
        let edges = 838_860_800; // 838,860,800 * 0.025 KB = exactly 20 GB
        assert_eq!(estimated_memory_gb(edges), 20.0);

        let graph = GraphDescriptor::new(10_000_000, edges, true);
        let metrics = DerivedMetrics::compute(&graph, 20.0);
        assert!(!metrics.partitioning_required);
    }

    #[test]
    fn test_partition_count_at_least_two_when_required() {
        // Just over budget: 20 GB footprint against 19.9 GB limit
        let graph = GraphDescriptor::new(10_000_000, 838_860_800, true);
        let metrics = DerivedMetrics::compute(&graph, 19.9);
        assert!(metrics.partitioning_required);
        let count = metrics.partition_count.unwrap();
        assert!(count >= 2, "headroom sizing forces a split, got {count}");
    }

    #[test]
    fn test_high_precision_flag() {
        let base = GraphDescriptor::new(1000, 2000, true);
        assert!(!DerivedMetrics::compute(&base, 20.0).high_precision);

        let standard = base.with_tolerance(1e-6);
        assert!(!DerivedMetrics::compute(&standard, 20.0).high_precision);

        let strict = base.with_tolerance(1e-8);
        assert!(DerivedMetrics::compute(&strict, 20.0).high_precision);

        // The cut itself is not high precision
        let boundary = base.with_tolerance(1e-7);
        assert!(!DerivedMetrics::compute(&boundary, 20.0).high_precision);
    }
}
