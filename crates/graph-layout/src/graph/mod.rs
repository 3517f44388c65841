//! Graph storage contract and the in-memory ordered store
//!
//! The force engine only talks to a graph through [`LayoutGraph`]. Nodes are
//! handed out by value and written back with [`LayoutGraph::replace`], so no
//! reference into the store outlives a single call.

mod import;
mod memory;

pub use memory::InMemoryGraph;

use crate::force::{self, LayoutStats, StepStats};
use crate::{Connection, LayoutNode, Vector2};

/// Identity type of the nodes stored in graph `G`
pub type IdOf<G> = <<G as LayoutGraph>::Node as LayoutNode>::Id;

/// Operations a graph backend provides to the layout engine
///
/// Implementors must keep a fixed iteration order for their nodes: the order
/// returned by [`nodes`](LayoutGraph::nodes) never changes for the lifetime
/// of the graph, and [`replace`](LayoutGraph::replace) keeps a node in its
/// slot. [`nodes_after`](LayoutGraph::nodes_after) relies on that order to
/// let the engine visit every unordered pair of nodes exactly once.
pub trait LayoutGraph {
    /// The type of nodes stored in this graph
    type Node: LayoutNode;

    /// Fetch a single node by id, or `None` if it is not in the graph
    fn node(&self, id: &<Self::Node as LayoutNode>::Id) -> Option<Self::Node>;

    /// All nodes, in iteration order
    fn nodes(&self) -> Vec<Self::Node>;

    /// All nodes positioned strictly after `id`, in iteration order
    ///
    /// Returns `None` if `id` is not in the graph. For the last node this is
    /// an empty collection, not `None`.
    fn nodes_after(&self, id: &<Self::Node as LayoutNode>::Id) -> Option<Vec<Self::Node>>;

    /// All connections in the graph
    fn connections(&self) -> Vec<Connection<<Self::Node as LayoutNode>::Id>>;

    /// Overwrite the node stored at `id`, keeping its position in iteration
    /// order. Does nothing if `id` is not in the graph.
    fn replace(&mut self, id: &<Self::Node as LayoutNode>::Id, node: Self::Node);

    /// Ids of all nodes, in iteration order
    fn ids(&self) -> Vec<<Self::Node as LayoutNode>::Id> {
        self.nodes().iter().map(|node| node.id().clone()).collect()
    }

    /// Apply every force to every node a single time
    ///
    /// `gravity_constant` pulls nodes towards the origin, `force_constant`
    /// scales repulsion between nodes.
    fn simulate(&mut self, gravity_constant: Vector2, force_constant: Vector2) -> StepStats
    where
        Self: Sized,
    {
        force::simulate(self, gravity_constant, force_constant)
    }

    /// Run [`simulate`](LayoutGraph::simulate) `times` times in a row
    fn layout(
        &mut self,
        times: usize,
        gravity_constant: Vector2,
        force_constant: Vector2,
    ) -> LayoutStats
    where
        Self: Sized,
    {
        force::layout(self, times, gravity_constant, force_constant)
    }
}
