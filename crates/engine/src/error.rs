//! Error types for the engine crate.
//!
//! The engine has a single taxonomy of concern: invalid input. Node and
//! edge counts are unsigned at the type level, so the only argument left
//! to police at runtime is the memory budget.

use thiserror::Error;

/// Errors that can occur while producing a recommendation
#[derive(Error, Debug)]
pub enum EngineError {
    /// The caller supplied a memory budget no threshold branch is
    /// well-defined for
    #[error("memory limit must be a positive number of GB, got {0}")]
    InvalidMemoryLimit(f64),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
