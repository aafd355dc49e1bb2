//! # Catalog Crate
//!
//! Reference datasets for the PageRank strategy advisor.
//!
//! The catalog carries the eight experiment-verified graphs the
//! selection thresholds were calibrated against, so callers can browse
//! named shapes instead of typing raw counts.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{find_dataset, reference_datasets};
//!
//! let twitter = find_dataset("twitter").expect("known id");
//! let rec = engine::recommend(&twitter.descriptor(), 20.0)?;
//! ```

pub mod datasets;

// Re-export commonly used items
pub use datasets::{Dataset, find_dataset, reference_datasets, search_datasets};
