use crate::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identity of a node within a graph
///
/// Blanket-implemented for every type that is cloneable, hashable and
/// debuggable, so `u32`, `String`, petgraph's `NodeIndex` and similar types
/// all qualify.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug {}

/// The capability set a node must expose to take part in a layout
///
/// The engine is written solely against this trait. Nodes are handled by
/// value: the engine reads a node from the graph, mutates its copy and writes
/// it back with [`LayoutGraph::replace`](crate::LayoutGraph::replace). A type
/// that proxies to some external store can implement the trait as long as
/// cloning it yields an independent copy of the values.
pub trait LayoutNode: Clone {
    /// The type used to identify nodes in the graph
    type Id: NodeId;

    /// Unique identity of this node within its graph
    fn id(&self) -> &Self::Id;

    /// Mass of this node
    ///
    /// Should be non-zero. Only the ratio between masses in the same graph
    /// matters, so giving every node a mass of 1 makes them all react to
    /// forces equally.
    fn mass(&self) -> f64;

    /// Force accumulated during the current simulation step
    fn force(&self) -> Vector2;

    fn set_force(&mut self, force: Vector2);

    /// Horizontal position on a hypothetical canvas
    fn x(&self) -> i64;

    fn set_x(&mut self, x: i64);

    /// Vertical position on a hypothetical canvas
    fn y(&self) -> i64;

    fn set_y(&mut self, y: i64);

    /// The integer position viewed as a floating point vector
    fn point(&self) -> Vector2 {
        Vector2::new(self.x() as f64, self.y() as f64)
    }

    /// Move the node to `point`
    ///
    /// Each component is rounded to the nearest integer, ties away from zero,
    /// and saturates at the `i64` bounds. NaN components are written as 0.
    fn set_point(&mut self, point: Vector2) {
        self.set_x(round_saturating(point.x));
        self.set_y(round_saturating(point.y));
    }

    /// Distance between this node's position and `other`'s
    fn distance_to(&self, other: &Self) -> f64 {
        self.point().distance(other.point())
    }
}

/// Round half away from zero, clamping to the `i64` range
pub(crate) fn round_saturating(value: f64) -> i64 {
    // `as` saturates on overflow and maps NaN to 0
    value.round() as i64
}

/// A node owned in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle<I> {
    pub id: I,
    pub mass: f64,
    #[serde(default)]
    pub force: Vector2,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
}

impl<I> Particle<I> {
    /// Create a particle at the origin with no force applied
    pub fn new(id: I, mass: f64) -> Self {
        Self {
            id,
            mass,
            force: Vector2::zero(),
            x: 0,
            y: 0,
        }
    }

    pub fn with_position(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_force(mut self, force: Vector2) -> Self {
        self.force = force;
        self
    }
}

impl<I: NodeId> LayoutNode for Particle<I> {
    type Id = I;

    fn id(&self) -> &I {
        &self.id
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn force(&self) -> Vector2 {
        self.force
    }

    fn set_force(&mut self, force: Vector2) {
        self.force = force;
    }

    fn x(&self) -> i64 {
        self.x
    }

    fn set_x(&mut self, x: i64) {
        self.x = x;
    }

    fn y(&self) -> i64 {
        self.y
    }

    fn set_y(&mut self, y: i64) {
        self.y = y;
    }
}

impl<I: fmt::Debug> fmt::Display for Particle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle(id: {:?}, mass: {:?}, force: {}, x: {}, y: {})",
            self.id, self.mass, self.force, self.x, self.y
        )
    }
}
