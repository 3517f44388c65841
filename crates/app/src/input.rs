use anyhow::{Context, Result};
use force_graph_layout::{Connection, InMemoryGraph, Particle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// A graph description as stored on disk
///
/// ```ron
/// (
///     nodes: [(id: "a", mass: 10.0), (id: "b", mass: 10.0, x: 5, y: 0)],
///     connections: [(lhs: "a", rhs: "b", distance: 10.0)],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<Particle<String>>,
    #[serde(default)]
    pub connections: Vec<Connection<String>>,
}

/// Final position of one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub x: i64,
    pub y: i64,
}

impl GraphFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read graph from {path:?}"))?;
        Self::parse(&text).with_context(|| format!("Failed to parse graph in {path:?}"))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Validate the nodes and build the layout graph, in file order
    pub fn into_graph(self) -> Result<InMemoryGraph<Particle<String>>> {
        let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        for connection in &self.connections {
            for end in [&connection.lhs, &connection.rhs] {
                if !ids.contains(end.as_str()) {
                    warn!(
                        "Connection {} - {} references unknown node {end}",
                        connection.lhs, connection.rhs
                    );
                }
            }
        }

        Ok(InMemoryGraph::try_from_nodes(self.nodes, self.connections)?)
    }
}

/// Positions of every node in `graph`, in store order
pub fn placements(graph: &InMemoryGraph<Particle<String>>) -> Vec<Placement> {
    graph
        .positions()
        .map(|(id, x, y)| Placement { id: id.clone(), x, y })
        .collect()
}
