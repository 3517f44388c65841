//! Force-directed graph layout
//!
//! This crate computes 2D integer positions for the nodes of a graph by
//! simulating physical forces: a gravity pulling every node towards the
//! origin, an inverse-square repulsion between every pair of nodes and a
//! spring along every connection pulling its endpoints towards a rest
//! distance.
//!
//! The engine works with any node type implementing [`LayoutNode`] stored in
//! any graph implementing [`LayoutGraph`]. [`InMemoryGraph`] is the bundled
//! ordered store.
//!
//! # Example
//!
//! ```
//! use force_graph_layout::{
//!     Connection, ForceLayout, InMemoryGraph, LayoutEngine, LayoutGraph, Particle, Vector2,
//! };
//!
//! // Create a graph
//! let nodes = (0..3).map(|id| Particle::new(id, 10.0));
//! let connections = vec![Connection::new(0, 1, 10.0), Connection::new(1, 2, 10.0)];
//! let mut graph = InMemoryGraph::from_nodes(nodes, connections);
//!
//! // Use the LayoutEngine trait with a reusable configuration:
//! ForceLayout::new(30).layout(&mut graph);
//!
//! // Or step the simulation directly for better control
//! let stats = graph.simulate(Vector2::splat(-1.1), Vector2::splat(1000.0));
//! assert_eq!(stats.repulsions, 3);
//!
//! for (id, x, y) in graph.positions() {
//!     println!("{id}: ({x}, {y})");
//! }
//! ```

mod connection;
mod engine;
mod error;
mod geometry;
mod node;

pub mod force;
pub mod graph;

// Re-export core types and traits
pub use connection::Connection;
pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use geometry::Vector2;
pub use node::{LayoutNode, NodeId, Particle};

// Re-export the force layout and graph store
pub use force::{
    ForceLayout, LayoutStats, StepStats, CONVERGENCE_TOLERANCE, DEFAULT_FORCE_CONSTANT,
    DEFAULT_GRAVITY_CONSTANT,
};
pub use graph::{IdOf, InMemoryGraph, LayoutGraph};
