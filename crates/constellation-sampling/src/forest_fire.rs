//! Forest Fire sampling.
//!
//! # Algorithm
//!
//! `groups` sources are drawn without replacement and each starts its own
//! fire. Every round, each burning node with a free neighbor spreads to a
//! random subset of its candidate neighbors; one without jumps to a random
//! node.
//! Nodes reached this round burn in the next one. A burning node that
//! reaches nothing keeps burning.
//!
//! A round that claims no free node hands the first burning node's group
//! one jump into the free pool, so the free pool shrinks every round and
//! the run terminates even under overlap.

use constellation_topology::{GroupId, NodeId, Swarm};
use rand::Rng;
use tracing::{debug, trace};

use crate::partition::{Claim, Ledger, Partition};
use crate::rng::{choose_sources, rng_from_seed};
use crate::walk::{has_free_neighbor, random_jump, spread};
use crate::{check_probability, Result, SamplingConfig};

/// Run Forest Fire with the generator seeded from `config.seed`.
pub fn forest_fire(swarm: &mut Swarm, config: &SamplingConfig) -> Result<Partition> {
    config.validate()?;
    let mut rng = rng_from_seed(config.seed);
    forest_fire_with_rng(swarm, config.groups, config.spread_probability, config.overlap, &mut rng)
}

/// Run Forest Fire drawing from `rng`.
///
/// Parameters are checked before any group tag changes. On success every
/// node of the swarm carries the tag of the group it ended in.
pub fn forest_fire_with_rng<R: Rng + ?Sized>(
    swarm: &mut Swarm,
    groups: usize,
    p: f64,
    overlap: bool,
    rng: &mut R,
) -> Result<Partition> {
    check_probability(p)?;
    let sources = choose_sources(swarm, groups, rng)?;
    swarm.reset_groups();

    let mut ledger = Ledger::new(swarm);
    for (i, &source) in sources.iter().enumerate() {
        ledger.claim(swarm, source, GroupId(i as u32))?;
    }

    let mut burning = sources;
    let mut rounds = 0usize;
    while ledger.has_free() {
        rounds += 1;
        let free_before = ledger.free_count();
        let mut next = Vec::with_capacity(burning.len());

        for &node in &burning {
            if !ledger.has_free() {
                break;
            }
            let Some(group) = swarm.node(node).and_then(|n| n.group().id()) else {
                continue;
            };

            let selected = burn(swarm, node, p, overlap, rng)?;
            let mut reached = false;
            for target in selected {
                if ledger.claim(swarm, target, group)? != Claim::Unchanged {
                    next.push(target);
                    reached = true;
                }
            }
            if !reached {
                next.push(node);
            }
        }

        if ledger.has_free() && ledger.free_count() == free_before {
            if let Some(group) = first_group(swarm, &burning) {
                let target = random_jump(swarm, false, rng)?;
                ledger.claim(swarm, target, group)?;
                next.push(target);
            }
        }

        dedup_in_order(&mut next);
        trace!(round = rounds, burning = next.len(), free = ledger.free_count(), "forest fire round");
        burning = next;
    }

    let partition = ledger.into_partition(swarm);
    debug!(groups, rounds, sizes = ?partition.sizes(), "forest fire finished");
    Ok(partition)
}

/// Nodes one burning node reaches this round.
///
/// Spreading needs a free neighbor. Overlap only widens what the spread or
/// the jump may pick, never whether the node spreads.
fn burn<R: Rng + ?Sized>(swarm: &Swarm, node: NodeId, p: f64, overlap: bool, rng: &mut R) -> Result<Vec<NodeId>> {
    if has_free_neighbor(swarm, node) {
        spread(swarm, node, p, overlap, rng)
    } else {
        Ok(vec![random_jump(swarm, overlap, rng)?])
    }
}

fn first_group(swarm: &Swarm, nodes: &[NodeId]) -> Option<GroupId> {
    nodes
        .iter()
        .find_map(|&id| swarm.node(id).and_then(|n| n.group().id()))
}

fn dedup_in_order(ids: &mut Vec<NodeId>) {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(*id));
}
