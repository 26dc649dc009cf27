//! Constellation Swarm Topology
//!
//! A swarm of spatially distributed nodes (satellites, drones, sensors)
//! modeled as a proximity graph.
//!
//! # Model
//!
//! Every node has a fixed position in 3D space. Two nodes are neighbors when
//! their Euclidean distance is at most the swarm's connection range:
//!
//! ```text
//! a ~ b  ⇔  a ≠ b ∧ ‖pos(a) − pos(b)‖ ≤ range
//! ```
//!
//! Adjacency is stored per node as a list of neighbor ids and is never
//! recomputed implicitly: after adding or removing nodes, or changing the
//! range, call [`Swarm::rebuild_adjacency`].
//!
//! # Layers
//!
//! - **Adjacency**: pairwise range test, full rebuild, neighbor and distance
//!   matrices
//! - **Metrics**: degree, clustering coefficient, k-vicinity, density
//! - **Connectivity**: connected components (DFS), shortest path lengths and
//!   diameter (BFS)
//! - **Export**: render snapshots and edge lists for external tools
//!
//! # Example
//!
//! ```
//! use constellation_topology::{Node, NodeId, Swarm};
//!
//! let mut swarm = Swarm::with_nodes(1.5, vec![
//!     Node::new(0, 0.0, 0.0, 0.0),
//!     Node::new(1, 1.0, 0.0, 0.0),
//!     Node::new(2, 2.0, 0.0, 0.0),
//!     Node::new(3, 10.0, 10.0, 10.0),
//! ]).unwrap();
//! swarm.rebuild_adjacency().unwrap();
//!
//! assert_eq!(swarm.degree(), vec![1, 2, 1, 0]);
//! assert_eq!(swarm.connected_components().len(), 2);
//! assert_eq!(swarm.diameter(&[NodeId(0), NodeId(1), NodeId(2)]).unwrap().hops, 2);
//! ```

mod adjacency;
mod connectivity;
mod error;
mod export;
mod metrics;
mod node;
mod position;
mod swarm;

pub use adjacency::validate_range;
pub use connectivity::Diameter;
pub use error::{Result, TopologyError};
pub use export::{EdgeList, RenderNode, RenderSnapshot};
pub use node::{Group, GroupId, Node, NodeId};
pub use position::Position;
pub use swarm::Swarm;
