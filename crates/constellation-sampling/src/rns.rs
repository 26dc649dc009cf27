//! Random node sampling (RNS).

use constellation_topology::{GroupId, Swarm};
use rand::seq::SliceRandom;
use tracing::debug;

use crate::partition::{Ledger, Partition};
use crate::rng::{derive_seed, rng_from_seed};
use crate::{Result, SamplingError};

/// Assign every node to a group drawn uniformly from `candidates`.
///
/// The node at index `i` draws from its own generator seeded with
/// [`derive_seed`]`(seed, i)`, so a node's group depends only on its
/// position in the swarm, the candidates and the seed.
pub fn random_node_sampling(swarm: &mut Swarm, candidates: &[GroupId], seed: u64) -> Result<Partition> {
    if candidates.is_empty() {
        return Err(SamplingError::EmptyCandidatePool);
    }
    swarm.reset_groups();

    let mut ledger = Ledger::new(swarm);
    for (i, id) in swarm.node_ids().into_iter().enumerate() {
        let mut rng = rng_from_seed(derive_seed(seed, i));
        let group = *candidates.choose(&mut rng).ok_or(SamplingError::EmptyCandidatePool)?;
        ledger.claim(swarm, id, group)?;
    }

    let partition = ledger.into_partition(swarm);
    debug!(candidates = candidates.len(), sizes = ?partition.sizes(), "random node sampling finished");
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_topology::{Group, Node, NodeId};

    fn swarm(n: u64) -> Swarm {
        Swarm::with_nodes(2.0, (0..n).map(|i| Node::new(i, i as f64, 0.0, 0.0))).unwrap()
    }

    #[test]
    fn draws_only_candidates() {
        let mut swarm = swarm(40);
        let candidates = [GroupId(2), GroupId(5)];
        let partition = random_node_sampling(&mut swarm, &candidates, 17).unwrap();

        assert_eq!(partition.node_count(), 40);
        assert!(partition.group_ids().iter().all(|g| candidates.contains(g)));
        assert!(swarm.nodes().iter().all(|n| n.group().id().is_some_and(|g| candidates.contains(&g))));
    }

    #[test]
    fn same_seed_same_groups() {
        let candidates = [GroupId(0), GroupId(1), GroupId(2)];
        let (mut a, mut b) = (swarm(25), swarm(25));
        assert_eq!(
            random_node_sampling(&mut a, &candidates, 9).unwrap(),
            random_node_sampling(&mut b, &candidates, 9).unwrap()
        );
    }

    #[test]
    fn zero_seed_gives_every_node_the_same_draw() {
        // derive_seed(0, i) == 0 for all i
        let mut swarm = swarm(10);
        let partition = random_node_sampling(&mut swarm, &[GroupId(0), GroupId(1)], 0).unwrap();
        assert_eq!(partition.len(), 1);
    }

    #[test]
    fn single_candidate() {
        let mut swarm = swarm(5);
        let partition = random_node_sampling(&mut swarm, &[GroupId(4)], 3).unwrap();
        assert_eq!(partition.sizes(), vec![5]);
        assert_eq!(partition.get(GroupId(4)).unwrap().node_ids(), swarm.node_ids());
    }

    #[test]
    fn empty_candidates_leave_groups_untouched() {
        let mut swarm = swarm(3);
        swarm.node_mut(NodeId(1)).unwrap().set_group(GroupId(8));
        assert_eq!(
            random_node_sampling(&mut swarm, &[], 1),
            Err(SamplingError::EmptyCandidatePool)
        );
        assert_eq!(swarm.node(NodeId(1)).unwrap().group(), Group::Assigned(GroupId(8)));
    }

    #[test]
    fn empty_swarm() {
        let mut swarm = Swarm::new(1.0);
        assert!(random_node_sampling(&mut swarm, &[GroupId(0)], 1).unwrap().is_empty());
    }
}
