//! Randomness discipline shared by all sampling algorithms.
//!
//! Every run is driven by an explicit generator. Entry points that take a
//! base seed build one [`StdRng`] from it and pass `&mut` through every
//! draw of the run, so equal seeds and equal inputs give equal partitions.
//! Random node sampling instead seeds one generator per node from
//! [`derive_seed`], which makes each node's draw independent of the others.

use constellation_topology::{NodeId, Swarm};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::{Result, SamplingError};

/// Generator for a run started from a base seed.
pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Per-draw seed for the draw at `index`: `base × index`, wrapping.
pub const fn derive_seed(base: u64, index: usize) -> u64 {
    base.wrapping_mul(index as u64)
}

/// Check that `requested` sources can be drawn from the swarm.
pub fn check_group_count(swarm: &Swarm, requested: usize) -> Result<()> {
    if requested == 0 {
        return Err(SamplingError::NoGroups);
    }
    if requested > swarm.len() {
        return Err(SamplingError::InsufficientNodes {
            requested,
            available: swarm.len(),
        });
    }
    Ok(())
}

/// Draw `count` distinct nodes uniformly, without replacement.
///
/// The order of the result is the draw order; source `i` seeds group `i`.
pub fn choose_sources<R: Rng + ?Sized>(swarm: &Swarm, count: usize, rng: &mut R) -> Result<Vec<NodeId>> {
    check_group_count(swarm, count)?;
    let nodes = swarm.nodes();
    Ok(index::sample(rng, nodes.len(), count)
        .into_iter()
        .map(|i| nodes[i].id())
        .collect())
}
