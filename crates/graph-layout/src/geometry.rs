use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector with f64 coordinates
///
/// All arithmetic is componentwise. Scalars broadcast to both axes through
/// [`Vector2::splat`] or the `f64` operator overloads. Division follows IEEE
/// semantics, so dividing by a zero component yields an infinite or NaN
/// component rather than panicking.
///
/// Serialized as an `(x, y)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector with both components set to `value`
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Create a zero vector
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean length, `sqrt(x² + y²)`
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance from `self` to `other`, the magnitude of `other - self`
    pub fn distance(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    /// Whether both components are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2(x: {:?}, y: {:?})", self.x, self.y)
    }
}

impl From<f64> for Vector2 {
    fn from(value: f64) -> Self {
        Self::splat(value)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

macro_rules! componentwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Vector2 {
            type Output = Vector2;

            fn $method(self, rhs: Vector2) -> Vector2 {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl $trait<f64> for Vector2 {
            type Output = Vector2;

            fn $method(self, rhs: f64) -> Vector2 {
                Vector2::new(self.x $op rhs, self.y $op rhs)
            }
        }

        impl $assign_trait for Vector2 {
            fn $assign_method(&mut self, rhs: Vector2) {
                *self = *self $op rhs;
            }
        }

        impl $assign_trait<f64> for Vector2 {
            fn $assign_method(&mut self, rhs: f64) {
                *self = *self $op rhs;
            }
        }
    };
}

componentwise!(Add, add, AddAssign, add_assign, +);
componentwise!(Sub, sub, SubAssign, sub_assign, -);
componentwise!(Mul, mul, MulAssign, mul_assign, *);
componentwise!(Div, div, DivAssign, div_assign, /);

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}
