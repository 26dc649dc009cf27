//! Multi-dimensional random walk (MDRW) sampling.
//!
//! One walker per group starts at a randomly drawn source. Walkers move in
//! group order, one step per round: along an edge when the walker's node
//! has a free neighbor, otherwise by a random jump. Overlap widens where a
//! step or jump may land, not which of the two is taken. Every node a
//! walker lands on joins the walker's group.

use constellation_topology::{GroupId, NodeId, Swarm};
use rand::Rng;
use tracing::{debug, trace};

use crate::partition::{Ledger, Partition};
use crate::rng::{choose_sources, rng_from_seed};
use crate::walk::{has_free_neighbor, random_jump, walk_step};
use crate::{Result, SamplingConfig};

#[derive(Debug, Clone, Copy)]
struct Walker {
    group: GroupId,
    at: NodeId,
}

/// Run MDRW with the generator seeded from `config.seed`.
///
/// `config.spread_probability` is not used.
pub fn mdrw(swarm: &mut Swarm, config: &SamplingConfig) -> Result<Partition> {
    config.validate()?;
    let mut rng = rng_from_seed(config.seed);
    mdrw_with_rng(swarm, config.groups, config.overlap, &mut rng)
}

/// Run MDRW drawing from `rng`.
pub fn mdrw_with_rng<R: Rng + ?Sized>(
    swarm: &mut Swarm,
    groups: usize,
    overlap: bool,
    rng: &mut R,
) -> Result<Partition> {
    let sources = choose_sources(swarm, groups, rng)?;
    swarm.reset_groups();

    let mut ledger = Ledger::new(swarm);
    let mut walkers = Vec::with_capacity(sources.len());
    for (i, source) in sources.into_iter().enumerate() {
        let group = GroupId(i as u32);
        ledger.claim(swarm, source, group)?;
        walkers.push(Walker { group, at: source });
    }

    let mut rounds = 0usize;
    while ledger.has_free() {
        rounds += 1;
        let free_before = ledger.free_count();

        for walker in walkers.iter_mut() {
            if !ledger.has_free() {
                break;
            }
            let next = step(swarm, walker.at, overlap, rng)?;
            ledger.claim(swarm, next, walker.group)?;
            walker.at = next;
        }

        // Under overlap a round can shuffle claimed nodes without reaching
        // the free pool
        if ledger.has_free() && ledger.free_count() == free_before {
            if let Some(walker) = walkers.first_mut() {
                let next = random_jump(swarm, false, rng)?;
                ledger.claim(swarm, next, walker.group)?;
                walker.at = next;
            }
        }
        trace!(round = rounds, free = ledger.free_count(), "mdrw round");
    }

    let partition = ledger.into_partition(swarm);
    debug!(groups, rounds, sizes = ?partition.sizes(), "mdrw finished");
    Ok(partition)
}

fn step<R: Rng + ?Sized>(swarm: &Swarm, at: NodeId, overlap: bool, rng: &mut R) -> Result<NodeId> {
    if has_free_neighbor(swarm, at) {
        walk_step(swarm, at, overlap, rng)
    } else {
        random_jump(swarm, overlap, rng)
    }
}
