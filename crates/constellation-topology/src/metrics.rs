//! Read-only graph metrics over the current adjacency.
//!
//! Nothing here rebuilds adjacency: metrics describe the neighbor lists as
//! they are stored. A neighbor id that is not a member of the swarm (for
//! example in a sampled group) is counted where a list length is asked for
//! but contributes no neighbors of its own.

use std::collections::HashSet;

use crate::{Node, NodeId, Swarm};

impl Swarm {
    /// Neighbor lists of a member, or an empty slice for non-members.
    pub(crate) fn neighbors_of(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::neighbors).unwrap_or(&[])
    }

    /// Degree of every node, in canonical order.
    pub fn degree(&self) -> Vec<usize> {
        self.nodes().iter().map(Node::degree).collect()
    }

    /// Average degree, 0 for an empty swarm.
    pub fn mean_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.degree().iter().sum::<usize>() as f64 / self.len() as f64
    }

    /// Clustering coefficient of one node.
    ///
    /// Ratio of links among the node's neighbors to the d(d-1)/2 possible
    /// ones. Each link between two neighbors is seen from both of them,
    /// hence the division by d(d-1). Nodes with fewer than two neighbors
    /// score 0.
    pub fn clustering_coefficient(&self, id: NodeId) -> Option<f64> {
        self.node(id).map(|node| self.clustering_of(node))
    }

    fn clustering_of(&self, node: &Node) -> f64 {
        let d = node.degree();
        if d < 2 {
            return 0.0;
        }
        let own: HashSet<NodeId> = node.neighbors().iter().copied().collect();
        let links: usize = node
            .neighbors()
            .iter()
            .map(|&u| {
                self.neighbors_of(u)
                    .iter()
                    .filter(|&w| own.contains(w))
                    .count()
            })
            .sum();
        links as f64 / (d * (d - 1)) as f64
    }

    /// Clustering coefficient of every node, in canonical order.
    pub fn clustering_coefficients(&self) -> Vec<f64> {
        self.nodes().iter().map(|n| self.clustering_of(n)).collect()
    }

    /// Average clustering coefficient, 0 for an empty swarm.
    pub fn mean_clustering_coefficient(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.clustering_coefficients().iter().sum::<f64>() / self.len() as f64
    }

    /// Number of distinct nodes reachable from `id` in at most `depth` hops.
    ///
    /// Depth 1 is the neighbor count. The node itself is counted once it is
    /// reachable back through a neighbor. Depth 0 is treated as depth 1.
    pub fn k_vicinity(&self, id: NodeId, depth: usize) -> Option<usize> {
        self.node(id).map(|node| self.vicinity_of(node, depth))
    }

    fn vicinity_of(&self, node: &Node, depth: usize) -> usize {
        let mut seen: HashSet<NodeId> = node.neighbors().iter().copied().collect();
        let mut frontier: Vec<NodeId> = seen.iter().copied().collect();

        for _ in 1..depth.max(1) {
            let mut next = Vec::new();
            for &id in &frontier {
                for &n in self.neighbors_of(id) {
                    if seen.insert(n) {
                        next.push(n);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        seen.len()
    }

    /// k-vicinity of every node, in canonical order.
    pub fn k_vicinities(&self, depth: usize) -> Vec<usize> {
        self.nodes().iter().map(|n| self.vicinity_of(n, depth)).collect()
    }

    /// Graph density: existing links over the N(N-1)/2 possible ones.
    ///
    /// Only neighbors that are members of this swarm count, so the density
    /// of a sampled group describes its induced subgraph.
    pub fn density(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        let half_edges: usize = self
            .nodes()
            .iter()
            .map(|node| node.neighbors().iter().filter(|&&id| self.contains(id)).count())
            .sum();
        half_edges as f64 / (n * (n - 1)) as f64
    }
}
