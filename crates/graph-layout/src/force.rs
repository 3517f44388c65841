//! Force-directed simulation
//!
//! One [`simulate`] step runs four passes over the graph, each finishing
//! before the next starts:
//!
//! 1. gravity: every node's force is reset to `point * gravity_constant`
//! 2. repulsion: every unordered pair of nodes pushes apart with an
//!    inverse-square force scaled by `force_constant`
//! 3. attraction: every connection pulls or pushes its endpoints towards the
//!    rest distance, unless they are already within [`CONVERGENCE_TOLERANCE`]
//! 4. integration: `point += force / mass`, a forward Euler step with a unit
//!    time step and no velocity
//!
//! Every pass reads nodes by value and writes them back through
//! [`LayoutGraph::replace`].

use crate::graph::LayoutGraph;
use crate::{LayoutEngine, LayoutNode, Vector2};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default pull towards the origin, applied on both axes
pub const DEFAULT_GRAVITY_CONSTANT: Vector2 = Vector2::splat(-1.1);

/// Default scale of the repulsion between nodes
pub const DEFAULT_FORCE_CONSTANT: Vector2 = Vector2::splat(1000.0);

/// Connections whose length is within this distance of their rest length
/// apply no force
pub const CONVERGENCE_TOLERANCE: f64 = 0.1;

/// What a single simulation step did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Pairwise repulsions applied
    pub repulsions: usize,

    /// Connections that moved their endpoints
    pub attractions: usize,

    /// Connections already within the convergence tolerance
    pub converged: usize,

    /// Connections skipped because an endpoint is not in the graph
    pub skipped: usize,
}

/// What a full layout run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Number of simulation steps performed
    pub iterations: usize,

    /// Statistics of the final step
    pub last: StepStats,
}

impl LayoutStats {
    /// Whether every connection was within tolerance during the final step
    pub fn converged(&self) -> bool {
        self.last.attractions == 0
    }
}

/// Configuration for the force-directed layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceLayout {
    /// Per-axis pull towards the origin, proportional to the distance from it
    pub gravity_constant: Vector2,

    /// Per-axis scale of the repulsion between nodes
    pub force_constant: Vector2,

    /// Number of simulation steps performed by a layout run
    pub iterations: usize,
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self {
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            force_constant: DEFAULT_FORCE_CONSTANT,
            iterations: 1,
        }
    }
}

impl ForceLayout {
    /// Create a new force layout running `iterations` steps
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    pub fn with_gravity_constant(mut self, gravity_constant: impl Into<Vector2>) -> Self {
        self.gravity_constant = gravity_constant.into();
        self
    }

    pub fn with_force_constant(mut self, force_constant: impl Into<Vector2>) -> Self {
        self.force_constant = force_constant.into();
        self
    }
}

impl<G> LayoutEngine<G> for ForceLayout
where
    G: LayoutGraph,
{
    fn layout(&self, graph: &mut G) -> LayoutStats {
        layout(
            graph,
            self.iterations,
            self.gravity_constant,
            self.force_constant,
        )
    }
}

/// Run `times` simulation steps back to back
///
/// There is no early exit; the caller picks the iteration budget.
pub fn layout<G>(
    graph: &mut G,
    times: usize,
    gravity_constant: Vector2,
    force_constant: Vector2,
) -> LayoutStats
where
    G: LayoutGraph,
{
    debug!("Laying out {} nodes over {times} iterations", graph.ids().len());

    let mut stats = LayoutStats::default();
    for _ in 0..times {
        stats.last = simulate(graph, gravity_constant, force_constant);
        stats.iterations += 1;
    }
    stats
}

/// Apply every force to every node a single time
pub fn simulate<G>(graph: &mut G, gravity_constant: Vector2, force_constant: Vector2) -> StepStats
where
    G: LayoutGraph,
{
    let mut stats = StepStats::default();

    apply_gravity(graph, gravity_constant);
    stats.repulsions = apply_repulsion(graph, force_constant);
    apply_attraction(graph, &mut stats);
    integrate(graph);

    debug!(
        "Step applied {} repulsions, {} attractions ({} converged, {} skipped)",
        stats.repulsions, stats.attractions, stats.converged, stats.skipped
    );
    stats
}

/// Reset each node's force to the pull towards the origin
fn apply_gravity<G>(graph: &mut G, gravity_constant: Vector2)
where
    G: LayoutGraph,
{
    for mut node in graph.nodes() {
        node.set_force(node.point() * gravity_constant);
        let id = node.id().clone();
        graph.replace(&id, node);
    }
}

/// Push every pair of nodes apart, returning the number of pairs visited
fn apply_repulsion<G>(graph: &mut G, force_constant: Vector2) -> usize
where
    G: LayoutGraph,
{
    let mut pairs = 0;
    for id in graph.ids() {
        // Fetched fresh: earlier iterations may have pushed this node
        let Some(mut node) = graph.node(&id) else {
            continue;
        };
        let Some(others) = graph.nodes_after(&id) else {
            continue;
        };

        let point = node.point();
        for mut other in others {
            if other.id() == &id {
                continue;
            }
            let relative_force = repulsion(other.point() - point, force_constant);
            node.set_force(node.force() - relative_force);
            other.set_force(other.force() + relative_force);
            let other_id = other.id().clone();
            graph.replace(&other_id, other);
            pairs += 1;
        }
        graph.replace(&id, node);
    }
    pairs
}

/// Inverse-square repulsion along `diff`
///
/// Coincident nodes have no direction to push along, so they get the raw
/// `force_constant` instead.
fn repulsion(diff: Vector2, force_constant: Vector2) -> Vector2 {
    let magnitude = diff.magnitude();
    if magnitude == 0.0 {
        force_constant
    } else {
        diff / (magnitude * magnitude) * force_constant
    }
}

/// Pull connected nodes towards their rest distance
fn apply_attraction<G>(graph: &mut G, stats: &mut StepStats)
where
    G: LayoutGraph,
{
    for connection in graph.connections() {
        let (Some(mut lhs), Some(mut rhs)) =
            (graph.node(&connection.lhs), graph.node(&connection.rhs))
        else {
            trace!("Skipping connection {:?} - {:?}", connection.lhs, connection.rhs);
            stats.skipped += 1;
            continue;
        };

        let distance = lhs.point() - rhs.point();
        if (distance.magnitude() - connection.distance).abs() < CONVERGENCE_TOLERANCE {
            trace!("Connection {:?} - {:?} is settled", connection.lhs, connection.rhs);
            stats.converged += 1;
            continue;
        }

        lhs.set_force(lhs.force() - distance);
        graph.replace(&connection.lhs, lhs);
        // Re-read in case both ends are the same node
        if let Some(current) = graph.node(&connection.rhs) {
            rhs = current;
        }
        rhs.set_force(rhs.force() + distance);
        graph.replace(&connection.rhs, rhs);
        stats.attractions += 1;
    }
}

/// Move every node by its accumulated force divided by its mass
fn integrate<G>(graph: &mut G)
where
    G: LayoutGraph,
{
    for mut node in graph.nodes() {
        let mass = node.mass();
        node.set_point(node.point() + node.force() / mass);
        let id = node.id().clone();
        graph.replace(&id, node);
    }
}
