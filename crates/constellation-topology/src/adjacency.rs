//! Adjacency derivation from node positions.
//!
//! Two nodes are neighbors when their Euclidean distance is at most the
//! connection range. The rebuild applies the pairwise test for every
//! ordered pair, so each link is registered from both endpoints and the
//! resulting graph is symmetric. Cost is O(n²) distance checks.

use tracing::debug;

use crate::{Position, NodeId, Result, Swarm, TopologyError};

/// Reject negative or NaN ranges.
pub fn validate_range(range: f64) -> Result<f64> {
    if range.is_nan() || range < 0.0 {
        return Err(TopologyError::InvalidRange(range));
    }
    Ok(range)
}

impl Swarm {
    /// Rebuild every neighbor list from the current connection range.
    pub fn rebuild_adjacency(&mut self) -> Result<()> {
        self.neighbor_matrix(None).map(|_| ())
    }

    /// Rebuild adjacency and return the N×N neighbor matrix.
    ///
    /// `matrix[i][j]` is `true` when node `j` is a neighbor of node `i`
    /// (canonical order). The diagonal is always `false`. When `range` is
    /// given it replaces the swarm's connection range; an invalid range
    /// leaves both the range and the adjacency untouched.
    pub fn neighbor_matrix(&mut self, range: Option<f64>) -> Result<Vec<Vec<bool>>> {
        let range = validate_range(range.unwrap_or(self.connection_range()))?;
        self.set_connection_range(range);

        let anchors: Vec<(NodeId, Position)> = self
            .nodes()
            .iter()
            .map(|n| (n.id(), n.position()))
            .collect();

        let matrix: Vec<Vec<bool>> = self
            .nodes_mut()
            .map(|node| {
                anchors
                    .iter()
                    .map(|(id, pos)| node.link_if_within(*id, pos, range))
                    .collect()
            })
            .collect();

        debug!(
            nodes = anchors.len(),
            edges = self.edge_count(),
            range,
            "adjacency rebuilt"
        );
        Ok(matrix)
    }

    /// Pairwise Euclidean distances in canonical order.
    ///
    /// Row `i` has one entry per *other* node; the node's own column is
    /// omitted rather than encoded as zero, so rows have length N-1.
    pub fn distance_matrix(&self) -> Vec<Vec<f64>> {
        self.nodes()
            .iter()
            .map(|a| {
                self.nodes()
                    .iter()
                    .filter(|b| b.id() != a.id())
                    .map(|b| a.distance_to(b))
                    .collect()
            })
            .collect()
    }

    /// Empty every neighbor list.
    pub fn reset_connections(&mut self) {
        for node in self.nodes_mut() {
            node.clear_neighbors();
        }
    }

    /// Number of undirected edges between members of this swarm.
    pub fn edge_count(&self) -> usize {
        let half_edges: usize = self
            .nodes()
            .iter()
            .map(|n| n.neighbors().iter().filter(|&&id| self.contains(id)).count())
            .sum();
        half_edges / 2
    }
}
