use super::InMemoryGraph;
use crate::{Connection, Particle};
use indexmap::IndexMap;
use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

impl<Ix> InMemoryGraph<Particle<NodeIndex<Ix>>>
where
    Ix: IndexType,
{
    /// Build a layout graph from a petgraph `Graph`
    ///
    /// Nodes are keyed by their `NodeIndex` and kept in index order. `mass`
    /// maps a node weight to the node's mass, `distance` maps an edge weight
    /// to the connection's rest distance. Every node starts at the origin;
    /// edge direction is ignored.
    pub fn from_petgraph_with<N, E, Ty, M, D>(
        graph: &Graph<N, E, Ty, Ix>,
        mass: M,
        distance: D,
    ) -> Self
    where
        Ty: EdgeType,
        M: Fn(&N) -> f64,
        D: Fn(&E) -> f64,
    {
        let nodes: IndexMap<_, _> = graph
            .node_indices()
            .map(|index| (index, Particle::new(index, mass(&graph[index]))))
            .collect();
        let connections = graph
            .edge_references()
            .map(|edge| Connection::new(edge.source(), edge.target(), distance(edge.weight())))
            .collect();
        Self::new(nodes, connections)
    }
}

/// Node weights are masses, edge weights are rest distances
impl<Ty, Ix> From<&Graph<f64, f64, Ty, Ix>> for InMemoryGraph<Particle<NodeIndex<Ix>>>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn from(graph: &Graph<f64, f64, Ty, Ix>) -> Self {
        Self::from_petgraph_with(graph, |&mass| mass, |&distance| distance)
    }
}
