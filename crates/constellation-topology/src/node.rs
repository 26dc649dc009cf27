//! Swarm nodes: identity, position, neighbor list and group tag.
//!
//! Adjacency is stored as neighbor ids rather than references to other
//! nodes. A node never owns its neighbors, so the mutual neighbor relation
//! is not an ownership cycle and the whole structure is plain data.

use crate::Position;

/// Unique identifier of a node within a swarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl NodeId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a sampling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u32);

impl GroupId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for GroupId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group membership of a node. A node belongs to at most one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// Not yet claimed by any sampling group
    #[default]
    Unassigned,
    /// Member of the given group
    Assigned(GroupId),
}

impl Group {
    #[inline]
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// The group id, if assigned.
    #[inline]
    pub const fn id(&self) -> Option<GroupId> {
        match self {
            Self::Assigned(id) => Some(*id),
            Self::Unassigned => None,
        }
    }
}

impl From<GroupId> for Group {
    fn from(id: GroupId) -> Self {
        Self::Assigned(id)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unassigned => write!(f, "unassigned"),
            Self::Assigned(id) => write!(f, "{}", id),
        }
    }
}

/// A node of the swarm, e.g. one satellite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    position: Position,
    /// Neighbor ids in insertion order, no duplicates, never `id` itself
    neighbors: Vec<NodeId>,
    group: Group,
}

impl Node {
    /// Create a node at the given coordinates.
    pub fn new(id: u64, x: f64, y: f64, z: f64) -> Self {
        Self::at(NodeId(id), Position::new(x, y, z))
    }

    /// Create a node at a position.
    pub fn at(id: NodeId, position: Position) -> Self {
        Self {
            id,
            position,
            neighbors: Vec::new(),
            group: Group::Unassigned,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Neighbor ids in the order they were registered.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn group(&self) -> Group {
        self.group
    }

    /// Whether no group has claimed this node yet.
    pub fn is_free(&self) -> bool {
        !self.group.is_assigned()
    }

    pub fn set_group(&mut self, group: GroupId) {
        self.group = Group::Assigned(group);
    }

    pub fn clear_group(&mut self) {
        self.group = Group::Unassigned;
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, id: NodeId) -> bool {
        self.neighbors.contains(&id)
    }

    /// Register a neighbor. Returns `false` if it was already present or
    /// is this node itself.
    pub fn add_neighbor(&mut self, id: NodeId) -> bool {
        if id == self.id || self.has_neighbor(id) {
            return false;
        }
        self.neighbors.push(id);
        true
    }

    /// Forget a neighbor. Returns `false` if it was not present.
    pub fn remove_neighbor(&mut self, id: NodeId) -> bool {
        match self.neighbors.iter().position(|&n| n == id) {
            Some(pos) => {
                self.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.position.distance(&other.position)
    }

    /// Pairwise adjacency test against a node known only by id and position.
    ///
    /// Registers `other` as a neighbor when it lies within `range` and
    /// returns `true`; otherwise drops it from the neighbor list and returns
    /// `false`. A node is never its own neighbor.
    ///
    /// Only this node's list is touched. Calling it for one ordering of a
    /// pair yields a directed approximation of the graph; the swarm's full
    /// rebuild applies both orderings.
    pub fn link_if_within(&mut self, other: NodeId, other_position: &Position, range: f64) -> bool {
        if other == self.id {
            return false;
        }
        if self.position.within(other_position, range) {
            self.add_neighbor(other);
            true
        } else {
            self.remove_neighbor(other);
            false
        }
    }

    /// Pairwise adjacency test against another node. See [`Node::link_if_within`].
    pub fn is_neighbor(&mut self, other: &Node, range: f64) -> bool {
        self.link_if_within(other.id, &other.position, range)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node {} {} has {} neighbor(s), group: {}",
            self.id,
            self.position,
            self.degree(),
            self.group
        )
    }
}
