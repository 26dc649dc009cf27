//! Group bookkeeping during a run, and the partition it produces.

use std::collections::BTreeMap;

use constellation_topology::{Group, GroupId, NodeId, Swarm, TopologyError};

use crate::Result;

/// Outcome of claiming a node for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Claim {
    /// The node was free
    Fresh,
    /// The node left another group (overlap only)
    Moved(GroupId),
    /// The node already belonged to the group
    Unchanged,
}

/// Tracks group membership order and the size of the free pool.
///
/// The swarm's group tags stay the source of truth for who is free; the
/// ledger only adds assignment order, which the tags cannot express.
#[derive(Debug)]
pub(crate) struct Ledger {
    members: BTreeMap<GroupId, Vec<NodeId>>,
    free: usize,
}

impl Ledger {
    /// Start a run: every node of the swarm must already be unassigned.
    pub(crate) fn new(swarm: &Swarm) -> Self {
        Self {
            members: BTreeMap::new(),
            free: swarm.free_nodes().len(),
        }
    }

    pub(crate) fn free_count(&self) -> usize {
        self.free
    }

    pub(crate) fn has_free(&self) -> bool {
        self.free > 0
    }

    /// Assign `node` to `group`, moving it out of its previous group if any.
    pub(crate) fn claim(&mut self, swarm: &mut Swarm, node: NodeId, group: GroupId) -> Result<Claim> {
        let target = swarm.node_mut(node).ok_or(TopologyError::UnknownNode(node))?;
        let claim = match target.group() {
            Group::Assigned(current) if current == group => return Ok(Claim::Unchanged),
            Group::Assigned(current) => {
                if let Some(list) = self.members.get_mut(&current) {
                    list.retain(|&id| id != node);
                }
                Claim::Moved(current)
            }
            Group::Unassigned => {
                self.free -= 1;
                Claim::Fresh
            }
        };
        target.set_group(group);
        self.members.entry(group).or_default().push(node);
        Ok(claim)
    }

    /// Materialize one swarm per group from the source swarm's nodes.
    pub(crate) fn into_partition(self, swarm: &Swarm) -> Partition {
        let groups = self
            .members
            .into_iter()
            .map(|(group, ids)| (group, swarm.subset(&ids)))
            .collect();
        Partition { groups }
    }
}

/// Sampled groups, each a swarm of the nodes assigned to it in assignment
/// order.
///
/// Grouped swarms hold copies of the source nodes taken when the run ended,
/// with their full neighbor lists and group tags. Every node of the source
/// swarm appears in exactly one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    groups: BTreeMap<GroupId, Swarm>,
}

impl Partition {
    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, group: GroupId) -> Option<&Swarm> {
        self.groups.get(&group)
    }

    /// Groups in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &Swarm)> {
        self.groups.iter().map(|(&g, s)| (g, s))
    }

    pub fn group_ids(&self) -> Vec<GroupId> {
        self.groups.keys().copied().collect()
    }

    /// Member count of every group, in ascending id order.
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.values().map(Swarm::len).collect()
    }

    /// Total nodes across all groups.
    pub fn node_count(&self) -> usize {
        self.groups.values().map(Swarm::len).sum()
    }

    /// Group holding `node`, if any.
    pub fn group_of(&self, node: NodeId) -> Option<GroupId> {
        self.groups
            .iter()
            .find(|(_, swarm)| swarm.contains(node))
            .map(|(&g, _)| g)
    }

    pub fn into_inner(self) -> BTreeMap<GroupId, Swarm> {
        self.groups
    }
}

impl IntoIterator for Partition {
    type Item = (GroupId, Swarm);
    type IntoIter = std::collections::btree_map::IntoIter<GroupId, Swarm>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
