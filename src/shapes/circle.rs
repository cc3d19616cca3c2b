use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle described by `center` and `radius`.
///
/// `radius` is intended non-negative, intermediate ratio computations may use
/// it signed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle with `center` and `radius`.
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        Circle { center, radius }
    }

    /// Create a new circle centered at `(x, y)` with `radius`.
    pub fn from_coords(x: T, y: T, radius: T) -> Self {
        Circle::new(Vector2::new(x, y), radius)
    }
}
