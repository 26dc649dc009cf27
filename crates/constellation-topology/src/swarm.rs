//! The swarm aggregate: an ordered node set plus a connection range.
//!
//! Node order is canonical. Every per-node output (degrees, matrices,
//! coefficient lists) is positional in this order, and every traversal
//! that needs a starting point picks the first eligible node in it.

use std::collections::HashMap;

use crate::{GroupId, Node, NodeId, Result, TopologyError};

/// A swarm of nodes connected by proximity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Swarm {
    connection_range: f64,
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
}

impl Swarm {
    /// Create an empty swarm.
    ///
    /// The range is only validated when adjacency is built.
    pub fn new(connection_range: f64) -> Self {
        Self {
            connection_range,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a swarm from a node set, keeping the given order.
    pub fn with_nodes(connection_range: f64, nodes: impl IntoIterator<Item = Node>) -> Result<Self> {
        let mut swarm = Self::new(connection_range);
        for node in nodes {
            swarm.add_node(node)?;
        }
        Ok(swarm)
    }

    pub fn connection_range(&self) -> f64 {
        self.connection_range
    }

    /// Change the connection range. Adjacency is stale until rebuilt.
    pub fn set_connection_range(&mut self, range: f64) {
        self.connection_range = range;
    }

    /// Append a node. Fails without touching the swarm if the id is taken.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.index.contains_key(&node.id()) {
            return Err(TopologyError::DuplicateId(node.id()));
        }
        self.index.insert(node.id(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Remove a node and return it.
    ///
    /// Other nodes keep listing it as a neighbor; metrics and traversals
    /// skip such dangling ids.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let pos = self.index.remove(&id)?;
        let node = self.nodes.remove(pos);
        for idx in self.index.values_mut() {
            if *idx > pos {
                *idx -= 1;
            }
        }
        Some(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of a node in the canonical order.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.index_of(id).map(move |i| &mut self.nodes[i])
    }

    /// Like [`Swarm::node`], but an unknown id is an error.
    pub fn try_node(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(TopologyError::UnknownNode(id))
    }

    /// Nodes in canonical order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Node ids in canonical order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Ids of nodes not claimed by any group, in canonical order.
    pub fn free_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.is_free())
            .map(Node::id)
            .collect()
    }

    /// Ids of the members of a group, in canonical order.
    pub fn members_of(&self, group: GroupId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.group().id() == Some(group))
            .map(Node::id)
            .collect()
    }

    /// Mark every node unassigned.
    pub fn reset_groups(&mut self) {
        for node in &mut self.nodes {
            node.clear_group();
        }
    }

    /// Build a swarm holding copies of the given nodes, in the given order.
    ///
    /// Unknown and repeated ids are skipped. The copies keep their full
    /// neighbor lists, which may reference nodes outside the new swarm.
    pub fn subset(&self, ids: &[NodeId]) -> Swarm {
        let mut sub = Swarm::new(self.connection_range);
        for &id in ids {
            if sub.contains(id) {
                continue;
            }
            if let Some(node) = self.node(id) {
                sub.index.insert(id, sub.nodes.len());
                sub.nodes.push(node.clone());
            }
        }
        sub
    }
}

impl std::fmt::Display for Swarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Swarm of {} node(s), connection range: {}",
            self.nodes.len(),
            self.connection_range
        )
    }
}
