use serde::{Deserialize, Serialize};

/// An undirected spring between two nodes
///
/// `lhs` and `rhs` only identify the endpoints; swapping them describes the
/// same connection. `distance` is the rest length the attraction force pulls
/// the pair towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<I> {
    pub lhs: I,
    pub rhs: I,
    pub distance: f64,
}

impl<I> Connection<I> {
    /// Create a new connection
    pub fn new(lhs: I, rhs: I, distance: f64) -> Self {
        Self { lhs, rhs, distance }
    }
}
