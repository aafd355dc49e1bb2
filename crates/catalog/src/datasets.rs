//! The reference dataset catalog.
//!
//! Counts, directedness, and tolerances match the graphs used in the
//! calibration experiments; descriptions carry the headline figures.

use engine::GraphDescriptor;
use serde::{Deserialize, Serialize};

/// A named graph shape, without any graph data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Stable identifier used as the batch result key
    pub id: String,
    pub name: String,
    pub node_count: u64,
    pub edge_count: u64,
    pub directed: bool,
    pub tolerance: Option<f64>,
    pub description: String,
}

impl Dataset {
    fn new(
        id: &str,
        name: &str,
        node_count: u64,
        edge_count: u64,
        directed: bool,
        tolerance: f64,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            node_count,
            edge_count,
            directed,
            tolerance: Some(tolerance),
            description: description.to_string(),
        }
    }

    /// The engine-facing view of this dataset's shape
    pub fn descriptor(&self) -> GraphDescriptor {
        GraphDescriptor {
            node_count: self.node_count,
            edge_count: self.edge_count,
            directed: self.directed,
            tolerance: self.tolerance,
        }
    }
}

/// The eight experiment-verified datasets, in catalog order.
pub fn reference_datasets() -> Vec<Dataset> {
    vec![
        Dataset::new(
            "pokec",
            "Pokec (Slovak social network)",
            1_632_803,
            30_622_564,
            true,
            1e-6,
            "Mid-scale social network; Gunrock sustained 1,077 MTEPS in 8.41s",
        ),
        Dataset::new(
            "livejournal",
            "LiveJournal (blogging network)",
            4_847_571,
            68_993_773,
            true,
            1e-6,
            "Large social network; Gunrock 18.83s, cuGraph 0.64s",
        ),
        Dataset::new(
            "orkut",
            "Orkut (social service)",
            3_072_441,
            117_185_083,
            false,
            1e-6,
            "Undirected social graph; Hessenberg run converged in 20 iterations (2.98s)",
        ),
        Dataset::new(
            "twitter",
            "Twitter-2010",
            41_652_230,
            1_468_365_182,
            true,
            1e-6,
            "Web-scale follower graph; four-way partitioning averaged 1,060 MTEPS",
        ),
        Dataset::new(
            "stackoverflow",
            "StackOverflow",
            2_601_977,
            63_497_050,
            true,
            1e-6,
            "Q&A knowledge graph; Gunrock measured 1,029 MTEPS",
        ),
        Dataset::new(
            "wikitalk",
            "WikiTalk",
            2_394_385,
            5_021_410,
            true,
            1e-8,
            "Wikipedia talk pages; sparse graph at 2.10 edges per node",
        ),
        Dataset::new(
            "slashdot",
            "Slashdot0902",
            82_168,
            948_464,
            true,
            1e-6,
            "Small community graph; Hessenberg needed 12 iterations where power iteration needed 825",
        ),
        Dataset::new(
            "uk2005",
            "UK-2005 web graph",
            39_459_923,
            936_364_282,
            true,
            1e-6,
            "Web crawl; Gunrock at 522 MTEPS in 1,792ms",
        ),
    ]
}

/// Look up a dataset by its identifier
pub fn find_dataset(id: &str) -> Option<Dataset> {
    reference_datasets().into_iter().find(|d| d.id == id)
}

/// Case-insensitive substring search over dataset names
pub fn search_datasets(fragment: &str) -> Vec<Dataset> {
    let fragment = fragment.to_lowercase();
    reference_datasets()
        .into_iter()
        .filter(|d| d.name.to_lowercase().contains(&fragment))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_datasets() {
        assert_eq!(reference_datasets().len(), 8);
    }

    #[test]
    fn test_dataset_ids_are_unique() {
        let datasets = reference_datasets();
        for (i, dataset) in datasets.iter().enumerate() {
            assert!(
                !datasets[i + 1..].iter().any(|other| other.id == dataset.id),
                "duplicate id: {}",
                dataset.id
            );
        }
    }

    #[test]
    fn test_find_dataset_by_id() {
        let twitter = find_dataset("twitter").expect("twitter should exist");
        assert_eq!(twitter.node_count, 41_652_230);
        assert_eq!(twitter.edge_count, 1_468_365_182);
        assert!(twitter.directed);

        assert!(find_dataset("does-not-exist").is_none());
    }

    #[test]
    fn test_orkut_is_the_undirected_entry() {
        let orkut = find_dataset("orkut").expect("orkut should exist");
        assert!(!orkut.directed);
        // Everything else is directed
        let others = reference_datasets()
            .into_iter()
            .filter(|d| d.id != "orkut")
            .all(|d| d.directed);
        assert!(others);
    }

    #[test]
    fn test_wikitalk_carries_a_strict_tolerance() {
        let wikitalk = find_dataset("wikitalk").expect("wikitalk should exist");
        assert_eq!(wikitalk.tolerance, Some(1e-8));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let hits = search_datasets("journal");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "livejournal");

        let hits = search_datasets("SOCIAL");
        assert!(hits.iter().any(|d| d.id == "pokec"));
        assert!(hits.iter().any(|d| d.id == "orkut"));

        assert!(search_datasets("no such graph").is_empty());
    }

    #[test]
    fn test_descriptor_mirrors_dataset_shape() {
        let slashdot = find_dataset("slashdot").expect("slashdot should exist");
        let descriptor = slashdot.descriptor();
        assert_eq!(descriptor.node_count, slashdot.node_count);
        assert_eq!(descriptor.edge_count, slashdot.edge_count);
        assert_eq!(descriptor.directed, slashdot.directed);
        assert_eq!(descriptor.tolerance, slashdot.tolerance);
    }

    #[test]
    fn test_dataset_round_trips_through_json() {
        let dataset = find_dataset("pokec").expect("pokec should exist");
        let json = serde_json::to_string(&dataset).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }
}
