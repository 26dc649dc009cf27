//! Error types for swarm sampling.

use constellation_topology::TopologyError;
use thiserror::Error;

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Errors that can occur while sampling a swarm.
///
/// Every parameter error is raised before any group tag is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// More sources requested than the swarm has nodes
    #[error("Insufficient nodes: requested {requested} sources, swarm has {available}")]
    InsufficientNodes { requested: usize, available: usize },

    /// Zero groups requested
    #[error("At least one group is required")]
    NoGroups,

    /// Spread probability outside [0, 1]
    #[error("Invalid probability: {0}")]
    InvalidProbability(f64),

    /// A random choice was asked to pick from nothing
    #[error("Empty candidate pool")]
    EmptyCandidatePool,

    /// Topology error
    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),
}
