//! Batch assessment over the dataset catalog.
//!
//! The engine itself is a pure function, so fanning out over datasets
//! is embarrassingly parallel; each call is independent and results are
//! returned in input order.

use std::collections::HashMap;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use catalog::Dataset;
use engine::{DEFAULT_MEMORY_LIMIT_GB, Recommendation, graph_density};

/// A recommendation enriched with the identity and shape of the dataset
/// it was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetAssessment {
    pub dataset_id: String,
    pub dataset_name: String,
    pub node_count: u64,
    pub edge_count: u64,
    pub directed: bool,
    /// Average edges per node
    pub density: f64,
    pub recommendation: Recommendation,
}

/// Runs the engine over a set of datasets with one shared memory budget.
#[derive(Debug, Clone)]
pub struct BatchAdvisor {
    memory_limit_gb: f64,
}

impl BatchAdvisor {
    /// Create an advisor with an explicit memory budget in GB
    pub fn new(memory_limit_gb: f64) -> Self {
        Self { memory_limit_gb }
    }

    /// Create an advisor with the reference 20 GB budget
    pub fn with_default_budget() -> Self {
        Self::new(DEFAULT_MEMORY_LIMIT_GB)
    }

    /// Assess every dataset, preserving input order.
    ///
    /// An invalid memory budget fails the whole batch; there is no
    /// per-dataset failure mode beyond that.
    #[instrument(skip(self, datasets), fields(memory_limit_gb = self.memory_limit_gb))]
    pub fn assess(&self, datasets: &[Dataset]) -> Result<Vec<DatasetAssessment>> {
        let assessments: Vec<DatasetAssessment> = datasets
            .par_iter()
            .map(|dataset| self.assess_one(dataset))
            .collect::<Result<_>>()?;

        info!(
            "Assessed {} datasets, {} of them partitioned",
            assessments.len(),
            assessments
                .iter()
                .filter(|a| a.recommendation.partitioning_required)
                .count()
        );
        Ok(assessments)
    }

    /// Assess every dataset and key the results by dataset identifier
    pub fn assess_by_id(&self, datasets: &[Dataset]) -> Result<HashMap<String, Recommendation>> {
        let assessments = self.assess(datasets)?;
        Ok(assessments
            .into_iter()
            .map(|a| (a.dataset_id, a.recommendation))
            .collect())
    }

    fn assess_one(&self, dataset: &Dataset) -> Result<DatasetAssessment> {
        let recommendation = engine::recommend(&dataset.descriptor(), self.memory_limit_gb)
            .with_context(|| format!("failed to assess dataset '{}'", dataset.id))?;

        Ok(DatasetAssessment {
            dataset_id: dataset.id.clone(),
            dataset_name: dataset.name.clone(),
            node_count: dataset.node_count,
            edge_count: dataset.edge_count,
            directed: dataset.directed,
            density: graph_density(dataset.node_count, dataset.edge_count),
            recommendation,
        })
    }
}

impl Default for BatchAdvisor {
    fn default() -> Self {
        Self::with_default_budget()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{find_dataset, reference_datasets};

    #[test]
    fn test_assess_preserves_catalog_order() {
        let datasets = reference_datasets();
        let assessments = BatchAdvisor::with_default_budget()
            .assess(&datasets)
            .unwrap();

        assert_eq!(assessments.len(), datasets.len());
        for (dataset, assessment) in datasets.iter().zip(&assessments) {
            assert_eq!(assessment.dataset_id, dataset.id);
            assert_eq!(assessment.dataset_name, dataset.name);
        }
    }

    #[test]
    fn test_assess_by_id_keys_every_dataset() {
        let datasets = reference_datasets();
        let by_id = BatchAdvisor::with_default_budget()
            .assess_by_id(&datasets)
            .unwrap();

        assert_eq!(by_id.len(), datasets.len());
        for dataset in &datasets {
            assert!(by_id.contains_key(&dataset.id), "missing key {}", dataset.id);
        }

        // Spot check: Twitter-2010 needs partitioning at the default budget
        let twitter = &by_id["twitter"];
        assert!(twitter.partitioning_required);
        assert_eq!(twitter.partition_count, Some(3));
    }

    #[test]
    fn test_assessment_enriches_with_dataset_shape() {
        let slashdot = find_dataset("slashdot").unwrap();
        let assessments = BatchAdvisor::with_default_budget()
            .assess(std::slice::from_ref(&slashdot))
            .unwrap();

        let assessment = &assessments[0];
        assert_eq!(assessment.node_count, 82_168);
        assert_eq!(assessment.edge_count, 948_464);
        assert!(assessment.directed);
        assert!((assessment.density - 11.54).abs() < 0.01);
        assert_eq!(assessment.recommendation.algorithm, "Power Method");
    }

    #[test]
    fn test_batch_matches_individual_calls() {
        let datasets = reference_datasets();
        let assessments = BatchAdvisor::with_default_budget()
            .assess(&datasets)
            .unwrap();

        for (dataset, assessment) in datasets.iter().zip(&assessments) {
            let solo = engine::recommend(&dataset.descriptor(), 20.0).unwrap();
            assert_eq!(assessment.recommendation, solo, "mismatch for {}", dataset.id);
        }
    }

    #[test]
    fn test_invalid_budget_fails_the_batch() {
        let datasets = reference_datasets();
        let result = BatchAdvisor::new(0.0).assess(&datasets);
        assert!(result.is_err());

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to assess dataset"));
    }

    #[test]
    fn test_tighter_budget_partitions_more_datasets() {
        let datasets = reference_datasets();
        let advisor = BatchAdvisor::new(1.0);
        let assessments = advisor.assess(&datasets).unwrap();

        let partitioned = assessments
            .iter()
            .filter(|a| a.recommendation.partitioning_required)
            .count();
        // At 1 GB most of the catalog exceeds the budget
        assert!(partitioned >= 5, "only {} partitioned", partitioned);
    }

    #[test]
    fn test_assessment_serializes() {
        let slashdot = find_dataset("slashdot").unwrap();
        let assessments = BatchAdvisor::with_default_budget()
            .assess(std::slice::from_ref(&slashdot))
            .unwrap();

        let json = serde_json::to_string(&assessments).unwrap();
        assert!(json.contains("\"dataset_id\":\"slashdot\""));
        assert!(json.contains("Power Method"));
    }
}
