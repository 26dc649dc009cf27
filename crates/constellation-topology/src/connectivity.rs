//! Graph traversal: connected components, shortest paths and diameter.
//!
//! Components follow the stored neighbor lists depth-first. Path lengths
//! treat the graph as unweighted and undirected: a link stored on either
//! endpoint counts both ways, and only members of the swarm are visited.
//! A pair without a path is a normal outcome and is simply left out.

use std::collections::{HashSet, VecDeque};

use crate::{NodeId, Swarm};

/// The longest shortest path found over a set of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diameter {
    pub source: NodeId,
    pub target: NodeId,
    /// Number of hops between source and target
    pub hops: usize,
}

impl Swarm {
    /// Connected components, each listed in depth-first visitation order.
    ///
    /// Components are started from the first unvisited node in canonical
    /// order and neighbors are followed in list order. Neighbor ids that
    /// are not members of the swarm are skipped.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(self.len());
        let mut components = Vec::new();

        for start in self.nodes() {
            if !visited.insert(start.id()) {
                continue;
            }
            let mut component = vec![start.id()];
            // (node, index of the next neighbor to look at)
            let mut stack: Vec<(NodeId, usize)> = vec![(start.id(), 0)];

            while let Some(top) = stack.last_mut() {
                let (current, cursor) = *top;
                match self.neighbors_of(current).get(cursor) {
                    Some(&next) => {
                        top.1 += 1;
                        if self.contains(next) && visited.insert(next) {
                            component.push(next);
                            stack.push((next, 0));
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Whether the swarm forms a single component. An empty swarm is not.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() == 1
    }

    /// Undirected member-only adjacency, by canonical index.
    fn undirected_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.len()];
        for (i, node) in self.nodes().iter().enumerate() {
            for &n in node.neighbors() {
                if let Some(j) = self.index_of(n) {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
            list.dedup();
        }
        adjacency
    }

    /// Hop counts from one canonical index to every other, `None` if unreachable.
    fn bfs(adjacency: &[Vec<usize>], source: usize) -> Vec<Option<usize>> {
        let mut dist = vec![None; adjacency.len()];
        let mut queue = VecDeque::new();
        dist[source] = Some(0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let next_hops = dist[current].map_or(0, |d| d + 1);
            for &n in &adjacency[current] {
                if dist[n].is_none() {
                    dist[n] = Some(next_hops);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    /// Canonical indices of the requested ids, in canonical order.
    fn member_indices(&self, subset: &[NodeId]) -> Vec<usize> {
        let wanted: HashSet<NodeId> = subset.iter().copied().collect();
        self.nodes()
            .iter()
            .enumerate()
            .filter(|(_, n)| wanted.contains(&n.id()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Hop count of the shortest path between two members.
    pub fn shortest_path_length(&self, from: NodeId, to: NodeId) -> Option<usize> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        Self::bfs(&self.undirected_adjacency(), source)[target]
    }

    /// Shortest path lengths between every ordered pair of distinct nodes
    /// of `subset`.
    ///
    /// Paths may run through any member of the swarm, not only through the
    /// subset. Pairs are visited source-major in canonical order; pairs
    /// without a path are skipped. Ids that are not members are ignored.
    pub fn shortest_path_lengths(&self, subset: &[NodeId]) -> Vec<usize> {
        let adjacency = self.undirected_adjacency();
        let members = self.member_indices(subset);
        let mut lengths = Vec::new();

        for &s in &members {
            let dist = Self::bfs(&adjacency, s);
            lengths.extend(
                members
                    .iter()
                    .filter(|&&t| t != s)
                    .filter_map(|&t| dist[t]),
            );
        }
        lengths
    }

    /// The pair of `subset` nodes with the longest shortest path.
    ///
    /// Uses the same pairs as [`Swarm::shortest_path_lengths`]. On ties the
    /// first pair found wins. Returns `None` when no two distinct subset
    /// members are connected.
    pub fn diameter(&self, subset: &[NodeId]) -> Option<Diameter> {
        let adjacency = self.undirected_adjacency();
        let members = self.member_indices(subset);
        let nodes = self.nodes();
        let mut best: Option<Diameter> = None;

        for &s in &members {
            let dist = Self::bfs(&adjacency, s);
            for &t in &members {
                let Some(hops) = dist[t] else { continue };
                if t == s || best.is_some_and(|b| hops <= b.hops) {
                    continue;
                }
                best = Some(Diameter {
                    source: nodes[s].id(),
                    target: nodes[t].id(),
                    hops,
                });
            }
        }
        best
    }

    /// Diameter over every member of the swarm.
    pub fn full_diameter(&self) -> Option<Diameter> {
        self.diameter(&self.node_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    fn ids(raw: &[u64]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    fn line4() -> Swarm {
        let mut swarm = Swarm::with_nodes(
            1.5,
            vec![
                Node::new(0, 0.0, 0.0, 0.0),
                Node::new(1, 1.0, 0.0, 0.0),
                Node::new(2, 2.0, 0.0, 0.0),
                Node::new(3, 10.0, 10.0, 10.0),
            ],
        )
        .unwrap();
        swarm.rebuild_adjacency().unwrap();
        swarm
    }

    #[test]
    fn components_of_line_and_isolated() {
        assert_eq!(line4().connected_components(), vec![ids(&[0, 1, 2]), ids(&[3])]);
        assert!(!line4().is_connected());
    }

    #[test]
    fn components_follow_depth_first_order() {
        // 0 - 1 - 3 and 0 - 2, neighbor lists set by hand
        let mut swarm = Swarm::with_nodes(0.0, (0..4).map(|i| Node::new(i, 0.0, 0.0, 0.0))).unwrap();
        for (a, b) in [(0, 1), (0, 2), (1, 3)] {
            swarm.node_mut(NodeId(a)).unwrap().add_neighbor(NodeId(b));
            swarm.node_mut(NodeId(b)).unwrap().add_neighbor(NodeId(a));
        }
        // depth-first goes 0 -> 1 -> 3 before coming back to 2
        assert_eq!(swarm.connected_components(), vec![ids(&[0, 1, 3, 2])]);
        assert!(swarm.is_connected());
    }

    #[test]
    fn components_skip_dangling_neighbors() {
        let mut swarm = line4();
        swarm.remove_node(NodeId(1));
        // 0 and 2 still list 1 but it is gone
        assert_eq!(swarm.connected_components(), vec![ids(&[0]), ids(&[2]), ids(&[3])]);
    }

    #[test]
    fn single_node_is_one_component() {
        let swarm = Swarm::with_nodes(1.0, vec![Node::new(9, 0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(swarm.connected_components(), vec![ids(&[9])]);
        assert_eq!(swarm.full_diameter(), None);
    }

    #[test]
    fn shortest_paths_skip_unreachable_pairs() {
        let swarm = line4();
        let lengths = swarm.shortest_path_lengths(&ids(&[0, 1, 2, 3]));
        // 0->1, 0->2, 1->0, 1->2, 2->0, 2->1
        assert_eq!(lengths, vec![1, 2, 1, 1, 2, 1]);
        assert_eq!(swarm.shortest_path_length(NodeId(0), NodeId(3)), None);
        assert_eq!(swarm.shortest_path_length(NodeId(0), NodeId(2)), Some(2));
        assert_eq!(swarm.shortest_path_length(NodeId(2), NodeId(2)), Some(0));
    }

    #[test]
    fn diameter_of_line() {
        let swarm = line4();
        assert_eq!(
            swarm.diameter(&ids(&[0, 1, 2])),
            Some(Diameter { source: NodeId(0), target: NodeId(2), hops: 2 })
        );
        // The isolated node does not make the diameter infinite
        assert_eq!(swarm.full_diameter().map(|d| d.hops), Some(2));
    }

    #[test]
    fn diameter_uses_canonical_order_for_ties() {
        let swarm = line4();
        // Subset given out of order still scans 1 before 2
        assert_eq!(
            swarm.diameter(&ids(&[2, 1])),
            Some(Diameter { source: NodeId(1), target: NodeId(2), hops: 1 })
        );
    }

    #[test]
    fn paths_go_through_nodes_outside_subset() {
        let swarm = line4();
        assert_eq!(swarm.shortest_path_lengths(&ids(&[0, 2])), vec![2, 2]);
    }

    #[test]
    fn one_sided_links_count_both_ways() {
        let mut swarm = Swarm::with_nodes(0.0, (0..2).map(|i| Node::new(i, 0.0, 0.0, 0.0))).unwrap();
        swarm.node_mut(NodeId(0)).unwrap().add_neighbor(NodeId(1));
        assert_eq!(swarm.shortest_path_length(NodeId(1), NodeId(0)), Some(1));
    }
}
