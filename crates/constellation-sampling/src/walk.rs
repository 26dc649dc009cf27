//! Primitive moves the samplers are built from.
//!
//! # Candidates
//!
//! A move only ever targets nodes of the swarm. Without overlap the
//! candidates are free nodes; with overlap any node qualifies, including
//! ones already claimed by some group. Neighbor ids that do not name a
//! member of the swarm are ignored.

use constellation_topology::{NodeId, Swarm};
use rand::distributions::{Bernoulli, Distribution};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Result, SamplingError};

fn is_candidate(swarm: &Swarm, id: NodeId, overlap: bool) -> bool {
    swarm.node(id).is_some_and(|n| overlap || n.is_free())
}

/// Candidate neighbors of `from`, in neighbor-list order.
pub fn candidate_neighbors(swarm: &Swarm, from: NodeId, overlap: bool) -> Vec<NodeId> {
    swarm
        .node(from)
        .map(|n| {
            n.neighbors()
                .iter()
                .copied()
                .filter(|&id| is_candidate(swarm, id, overlap))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether `id` has at least one unassigned neighbor in the swarm.
pub fn has_free_neighbor(swarm: &Swarm, id: NodeId) -> bool {
    swarm
        .node(id)
        .is_some_and(|n| n.neighbors().iter().any(|&nb| is_candidate(swarm, nb, false)))
}

/// Pick a node uniformly from the free pool, or from the whole swarm
/// under overlap.
pub fn random_jump<R: Rng + ?Sized>(swarm: &Swarm, overlap: bool, rng: &mut R) -> Result<NodeId> {
    let pool = if overlap { swarm.node_ids() } else { swarm.free_nodes() };
    pool.choose(rng).copied().ok_or(SamplingError::EmptyCandidatePool)
}

/// One independent Bernoulli(`p`) trial per candidate neighbor of `from`.
///
/// Returns the selected neighbors in neighbor-list order. The result may be
/// empty.
pub fn spread<R: Rng + ?Sized>(
    swarm: &Swarm,
    from: NodeId,
    p: f64,
    overlap: bool,
    rng: &mut R,
) -> Result<Vec<NodeId>> {
    let trial = Bernoulli::new(p).map_err(|_| SamplingError::InvalidProbability(p))?;
    Ok(candidate_neighbors(swarm, from, overlap)
        .into_iter()
        .filter(|_| trial.sample(&mut *rng))
        .collect())
}

/// Move from `from` to one of its candidate neighbors, chosen uniformly.
pub fn walk_step<R: Rng + ?Sized>(swarm: &Swarm, from: NodeId, overlap: bool, rng: &mut R) -> Result<NodeId> {
    candidate_neighbors(swarm, from, overlap)
        .choose(rng)
        .copied()
        .ok_or(SamplingError::EmptyCandidatePool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::rng_from_seed;
    use constellation_topology::{GroupId, Node};

    /// Star: node 0 at the center, 1..=4 around it at distance 1.
    fn star() -> Swarm {
        let mut swarm = Swarm::with_nodes(
            1.0,
            vec![
                Node::new(0, 0.0, 0.0, 0.0),
                Node::new(1, 1.0, 0.0, 0.0),
                Node::new(2, -1.0, 0.0, 0.0),
                Node::new(3, 0.0, 1.0, 0.0),
                Node::new(4, 0.0, -1.0, 0.0),
            ],
        )
        .unwrap();
        swarm.rebuild_adjacency().unwrap();
        swarm
    }

    #[test]
    fn jump_only_lands_on_free_nodes() {
        let mut swarm = star();
        for id in [0, 1, 2, 3] {
            swarm.node_mut(NodeId(id)).unwrap().set_group(GroupId(0));
        }
        let mut rng = rng_from_seed(5);
        for _ in 0..20 {
            assert_eq!(random_jump(&swarm, false, &mut rng).unwrap(), NodeId(4));
        }
    }

    #[test]
    fn jump_with_overlap_ignores_groups() {
        let mut swarm = star();
        for node in swarm.nodes_mut() {
            node.set_group(GroupId(1));
        }
        let mut rng = rng_from_seed(5);
        assert_eq!(random_jump(&swarm, false, &mut rng), Err(SamplingError::EmptyCandidatePool));
        assert!(swarm.contains(random_jump(&swarm, true, &mut rng).unwrap()));
    }

    #[test]
    fn spread_extremes() {
        let swarm = star();
        let mut rng = rng_from_seed(9);
        assert!(spread(&swarm, NodeId(0), 0.0, false, &mut rng).unwrap().is_empty());
        assert_eq!(
            spread(&swarm, NodeId(0), 1.0, false, &mut rng).unwrap(),
            vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]
        );
        assert_eq!(
            spread(&swarm, NodeId(0), 2.0, false, &mut rng),
            Err(SamplingError::InvalidProbability(2.0))
        );
    }

    #[test]
    fn spread_skips_claimed_neighbors() {
        let mut swarm = star();
        swarm.node_mut(NodeId(2)).unwrap().set_group(GroupId(0));
        let mut rng = rng_from_seed(9);
        assert_eq!(
            spread(&swarm, NodeId(0), 1.0, false, &mut rng).unwrap(),
            vec![NodeId(1), NodeId(3), NodeId(4)]
        );
        assert_eq!(spread(&swarm, NodeId(0), 1.0, true, &mut rng).unwrap().len(), 4);
    }

    #[test]
    fn walk_step_follows_edges() {
        let mut swarm = star();
        let mut rng = rng_from_seed(2);
        for _ in 0..10 {
            assert_eq!(walk_step(&swarm, NodeId(3), false, &mut rng).unwrap(), NodeId(0));
        }
        swarm.node_mut(NodeId(0)).unwrap().set_group(GroupId(0));
        assert!(!has_free_neighbor(&swarm, NodeId(3)));
        assert_eq!(walk_step(&swarm, NodeId(3), false, &mut rng), Err(SamplingError::EmptyCandidatePool));
        assert_eq!(walk_step(&swarm, NodeId(3), true, &mut rng).unwrap(), NodeId(0));
    }

    #[test]
    fn dangling_neighbors_are_not_candidates() {
        let mut swarm = star();
        swarm.node_mut(NodeId(1)).unwrap().add_neighbor(NodeId(42));
        assert_eq!(candidate_neighbors(&swarm, NodeId(1), true), vec![NodeId(0)]);
        assert!(candidate_neighbors(&swarm, NodeId(42), true).is_empty());
    }

    proptest::proptest! {
        #[test]
        fn spread_selects_a_subsequence_of_candidates(p in 0.0f64..=1.0, seed in proptest::prelude::any::<u64>()) {
            let swarm = star();
            let candidates = candidate_neighbors(&swarm, NodeId(0), false);
            let selected = spread(&swarm, NodeId(0), p, false, &mut rng_from_seed(seed)).unwrap();

            let mut rest = candidates.iter();
            for id in &selected {
                proptest::prop_assert!(rest.any(|c| c == id));
            }
        }
    }
}
