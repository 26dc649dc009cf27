//! Plain-data views of a swarm for external collaborators.
//!
//! A renderer needs positions, group tags and edges; a graph inspector
//! needs the id set and the edge list. Neither feeds back into any
//! topology computation.

use crate::{Group, NodeId, Position, Swarm};

/// One node as seen by a renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderNode {
    pub id: NodeId,
    pub position: Position,
    pub group: Group,
    /// Neighbor ids that are members of the swarm
    pub neighbors: Vec<NodeId>,
    /// Externally tracked state code (e.g. message propagation), if any
    pub state: Option<i32>,
}

/// Positions, groups and adjacency of a swarm at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub nodes: Vec<RenderNode>,
}

impl RenderSnapshot {
    /// Attach a state code to every node.
    pub fn with_states<F>(mut self, state_of: F) -> Self
    where
        F: Fn(NodeId) -> Option<i32>,
    {
        for node in &mut self.nodes {
            node.state = state_of(node.id);
        }
        self
    }

    /// Line segments to draw, one per undirected edge.
    pub fn segments(&self) -> Vec<(Position, Position)> {
        let mut segments = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            for b in &self.nodes[i + 1..] {
                if a.neighbors.contains(&b.id) || b.neighbors.contains(&a.id) {
                    segments.push((a.position, b.position));
                }
            }
        }
        segments
    }
}

/// Node set and undirected edge list of a swarm.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeList {
    pub nodes: Vec<NodeId>,
    /// Each edge once, earlier node (canonical order) first
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Swarm {
    /// Snapshot for a renderer. Links to non-members are left out.
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let nodes = self
            .nodes()
            .iter()
            .map(|n| RenderNode {
                id: n.id(),
                position: n.position(),
                group: n.group(),
                neighbors: n
                    .neighbors()
                    .iter()
                    .copied()
                    .filter(|&id| self.contains(id))
                    .collect(),
                state: None,
            })
            .collect();
        RenderSnapshot { nodes }
    }

    /// Node ids and undirected edges in canonical order.
    pub fn edge_list(&self) -> EdgeList {
        let nodes = self.nodes();
        let mut edges = Vec::new();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                if a.has_neighbor(b.id()) || b.has_neighbor(a.id()) {
                    edges.push((a.id(), b.id()));
                }
            }
        }
        EdgeList {
            nodes: self.node_ids(),
            edges,
        }
    }
}
