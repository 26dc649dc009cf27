//! Benchmarks for swarm sampling
//!
//! Each iteration samples a fresh clone of a prebuilt lattice, so adjacency
//! construction is not measured.

use constellation_sampling::{random_node_sampling, sample, Method, SamplingConfig};
use constellation_topology::{GroupId, Node, Swarm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Square lattice with unit spacing, adjacency built.
fn lattice_swarm(side: u64, range: f64) -> Swarm {
    let nodes = (0..side * side).map(|i| Node::new(i, (i % side) as f64, (i / side) as f64, 0.0));
    let mut swarm = Swarm::with_nodes(range, nodes).expect("lattice ids are unique");
    swarm.rebuild_adjacency().expect("valid range");
    swarm
}

/// Forest Fire and MDRW at different swarm sizes
fn bench_walkers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let config = SamplingConfig::default().with_groups(8).with_seed(42);

    for &side in &[16u64, 32, 64] {
        let swarm = lattice_swarm(side, 1.5);
        group.throughput(Throughput::Elements(side * side));

        for method in [Method::ForestFire, Method::MultiDimensionalRandomWalk] {
            group.bench_with_input(BenchmarkId::new(method.to_string(), side * side), &swarm, |b, s| {
                b.iter(|| {
                    let mut s = s.clone();
                    black_box(sample(&mut s, method, &config).expect("valid config"))
                })
            });
        }
    }
    group.finish();
}

/// Random node sampling reseeds per node
fn bench_random_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_node");
    let candidates: Vec<GroupId> = (0..8).map(GroupId).collect();

    for &side in &[32u64, 64] {
        let swarm = lattice_swarm(side, 1.0);
        group.throughput(Throughput::Elements(side * side));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &swarm, |b, s| {
            b.iter(|| {
                let mut s = s.clone();
                black_box(random_node_sampling(&mut s, &candidates, 7).expect("non-empty candidates"))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walkers, bench_random_node);

criterion_main!(benches);
