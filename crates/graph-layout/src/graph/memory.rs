use super::LayoutGraph;
use crate::{Connection, LayoutError, LayoutNode};
use indexmap::IndexMap;

/// A graph held entirely in memory
///
/// Nodes live in an insertion-ordered hash map, which gives constant-time
/// lookup and replacement while keeping the iteration order fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct InMemoryGraph<N>
where
    N: LayoutNode,
{
    nodes: IndexMap<N::Id, N>,
    connections: Vec<Connection<N::Id>>,
}

impl<N> InMemoryGraph<N>
where
    N: LayoutNode,
{
    /// Create a graph from an id to node mapping, keeping the mapping's order
    pub fn new(nodes: IndexMap<N::Id, N>, connections: Vec<Connection<N::Id>>) -> Self {
        Self { nodes, connections }
    }

    /// Create a graph keyed by each node's own id, in iteration order
    ///
    /// If an id is supplied more than once, the last node wins but keeps the
    /// slot of the first.
    pub fn from_nodes<I>(nodes: I, connections: Vec<Connection<N::Id>>) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let nodes = nodes
            .into_iter()
            .map(|node| (node.id().clone(), node))
            .collect();
        Self::new(nodes, connections)
    }

    /// Like [`from_nodes`](Self::from_nodes), but rejects duplicate ids and
    /// masses that are zero, negative or not finite
    ///
    /// # Errors
    /// Returns the first offending node in iteration order.
    pub fn try_from_nodes<I>(
        nodes: I,
        connections: Vec<Connection<N::Id>>,
    ) -> Result<Self, LayoutError<N::Id>>
    where
        I: IntoIterator<Item = N>,
    {
        let nodes = nodes.into_iter();
        let mut map = IndexMap::with_capacity(nodes.size_hint().0);
        for node in nodes {
            let id = node.id().clone();
            let mass = node.mass();
            if !(mass.is_finite() && mass > 0.0) {
                return Err(LayoutError::InvalidMass { id, mass });
            }
            if map.contains_key(&id) {
                return Err(LayoutError::DuplicateNode { id });
            }
            map.insert(id, node);
        }
        Ok(Self::new(map, connections))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &N::Id) -> bool {
        self.nodes.contains_key(id)
    }

    /// Borrowing iterator over the nodes, in iteration order
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.values()
    }

    /// Current integer position of every node, in iteration order
    pub fn positions(&self) -> impl Iterator<Item = (&N::Id, i64, i64)> + '_ {
        self.nodes.iter().map(|(id, node)| (id, node.x(), node.y()))
    }
}

impl<N> LayoutGraph for InMemoryGraph<N>
where
    N: LayoutNode,
{
    type Node = N;

    fn node(&self, id: &N::Id) -> Option<N> {
        self.nodes.get(id).cloned()
    }

    fn nodes(&self) -> Vec<N> {
        self.nodes.values().cloned().collect()
    }

    fn nodes_after(&self, id: &N::Id) -> Option<Vec<N>> {
        let index = self.nodes.get_index_of(id)?;
        Some(self.nodes.values().skip(index + 1).cloned().collect())
    }

    fn connections(&self) -> Vec<Connection<N::Id>> {
        self.connections.clone()
    }

    /// The slot stays keyed by `id` even if `node` reports a different id.
    fn replace(&mut self, id: &N::Id, node: N) {
        if let Some(slot) = self.nodes.get_mut(id) {
            *slot = node;
        }
    }

    fn ids(&self) -> Vec<N::Id> {
        self.nodes.keys().cloned().collect()
    }
}
