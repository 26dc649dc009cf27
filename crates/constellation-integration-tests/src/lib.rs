//! Shared fixtures for the cross-crate test suites in `tests/`.

use std::sync::Once;

use constellation_topology::{Node, Swarm};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to warnings only.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a swarm from `(x, y, z)` triples with ids `0..n`, adjacency built.
pub fn swarm_from_coords(range: f64, coords: &[(f64, f64, f64)]) -> Swarm {
    let nodes = coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y, z))| Node::new(i as u64, x, y, z));
    let mut swarm = Swarm::with_nodes(range, nodes).expect("sequential ids are unique");
    swarm.rebuild_adjacency().expect("fixture range is valid");
    swarm
}

/// Three nodes on a line at unit spacing plus one far away, range 1.5.
pub fn line_with_outlier() -> Swarm {
    swarm_from_coords(
        1.5,
        &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0), (10.0, 10.0, 10.0)],
    )
}

/// `side × side × layers` lattice with unit spacing.
pub fn lattice(side: usize, layers: usize, range: f64) -> Swarm {
    let coords: Vec<_> = (0..side * side * layers)
        .map(|i| ((i % side) as f64, ((i / side) % side) as f64, (i / (side * side)) as f64))
        .collect();
    swarm_from_coords(range, &coords)
}
