//! Constellation Swarm Sampling
//!
//! Partitions a [`Swarm`] into groups of nodes. Every algorithm assigns
//! every node to exactly one group and returns a [`Partition`] holding one
//! swarm per group.
//!
//! # Algorithms
//!
//! - **Forest Fire**: fires spread from random sources along edges with a
//!   fixed probability, jumping when they run out of fuel
//! - **MDRW**: one random walker per group, jumping when stuck
//! - **Random node sampling**: each node independently draws a group from
//!   a candidate list
//!
//! # Determinism
//!
//! Randomness always comes from a seeded [`rand::rngs::StdRng`]. Equal
//! seeds and equal swarms give equal partitions.
//!
//! # Overlap
//!
//! With overlap enabled, moves may target nodes that already belong to a
//! group. Such a node changes group; it never belongs to two at once.
//!
//! # Example
//!
//! ```
//! use constellation_sampling::{forest_fire, SamplingConfig};
//! use constellation_topology::{Node, Swarm};
//!
//! let mut swarm = Swarm::with_nodes(1.0, (0..16).map(|i| {
//!     Node::new(i, (i % 4) as f64, (i / 4) as f64, 0.0)
//! })).unwrap();
//! swarm.rebuild_adjacency().unwrap();
//!
//! let config = SamplingConfig::default().with_groups(2).with_seed(7);
//! let partition = forest_fire(&mut swarm, &config).unwrap();
//! assert_eq!(partition.len(), 2);
//! assert_eq!(partition.node_count(), 16);
//! ```

mod config;
mod error;
mod forest_fire;
mod mdrw;
mod partition;
mod rng;
mod rns;
mod walk;

use constellation_topology::Swarm;

pub use config::{check_probability, SamplingConfig};
pub use error::{Result, SamplingError};
pub use forest_fire::{forest_fire, forest_fire_with_rng};
pub use mdrw::{mdrw, mdrw_with_rng};
pub use partition::Partition;
pub use rng::{check_group_count, choose_sources, derive_seed, rng_from_seed};
pub use rns::random_node_sampling;
pub use walk::{candidate_neighbors, has_free_neighbor, random_jump, spread, walk_step};

/// Sampling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    ForestFire,
    MultiDimensionalRandomWalk,
    /// Candidates are `0..config.groups`
    RandomNode,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::ForestFire => write!(f, "forest fire"),
            Method::MultiDimensionalRandomWalk => write!(f, "MDRW"),
            Method::RandomNode => write!(f, "random node"),
        }
    }
}

/// Run `method` on the swarm with the parameters in `config`.
pub fn sample(swarm: &mut Swarm, method: Method, config: &SamplingConfig) -> Result<Partition> {
    match method {
        Method::ForestFire => forest_fire(swarm, config),
        Method::MultiDimensionalRandomWalk => mdrw(swarm, config),
        Method::RandomNode => {
            config.validate()?;
            random_node_sampling(swarm, &config.candidate_groups(), config.seed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_topology::{GroupId, Node};

    fn ring(n: u64) -> Swarm {
        let step = std::f64::consts::TAU / n as f64;
        let nodes = (0..n).map(|i| {
            let angle = step * i as f64;
            Node::new(i, 5.0 * angle.cos(), 5.0 * angle.sin(), 0.0)
        });
        let mut swarm = Swarm::with_nodes(5.0 * step * 1.01, nodes).unwrap();
        swarm.rebuild_adjacency().unwrap();
        swarm
    }

    #[test]
    fn every_method_covers_the_swarm() {
        let config = SamplingConfig::default().with_groups(3).with_seed(13);
        for method in [Method::ForestFire, Method::MultiDimensionalRandomWalk, Method::RandomNode] {
            let mut swarm = ring(24);
            let partition = sample(&mut swarm, method, &config).unwrap();
            assert_eq!(partition.node_count(), 24, "{method}");
            assert!(swarm.free_nodes().is_empty(), "{method}");
            assert!(partition.group_ids().iter().all(|g| g.value() < 3), "{method}");
        }
    }

    #[test]
    fn random_node_uses_config_groups() {
        let mut swarm = ring(12);
        let config = SamplingConfig::default().with_groups(1);
        let partition = sample(&mut swarm, Method::RandomNode, &config).unwrap();
        assert_eq!(partition.group_ids(), vec![GroupId(0)]);
        assert_eq!(
            sample(&mut swarm, Method::RandomNode, &config.with_groups(0)),
            Err(SamplingError::NoGroups)
        );
    }

    #[test]
    fn ring_neighbors_are_adjacent_indices() {
        let swarm = ring(8);
        assert_eq!(swarm.degree(), vec![2; 8]);
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::ForestFire.to_string(), "forest fire");
        assert_eq!(Method::MultiDimensionalRandomWalk.to_string(), "MDRW");
    }
}
