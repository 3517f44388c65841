use std::fmt;
use thiserror::Error;

/// Errors raised when building a graph through the validating constructors
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError<I>
where
    I: fmt::Debug,
{
    /// The node's mass is zero, negative or not finite
    #[error("node {id:?} has invalid mass {mass}")]
    InvalidMass { id: I, mass: f64 },

    /// Two nodes share the same identity
    #[error("node {id:?} appears more than once")]
    DuplicateNode { id: I },
}
