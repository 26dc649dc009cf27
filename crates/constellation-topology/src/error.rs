//! Error types for swarm topology.

use thiserror::Error;

use crate::NodeId;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors that can occur while building or querying a swarm.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// Connection range is negative or not a number
    #[error("Invalid connection range: {0}")]
    InvalidRange(f64),

    /// A node with this id is already part of the swarm
    #[error("Duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// No node with this id exists in the swarm
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}
