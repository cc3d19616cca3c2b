use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::errors::DegenerateError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite line through the two points `p1` and `p2`.
///
/// The line is degenerate when `p1 == p2` (zero length direction).
/// Operations that must normalize the direction reject degenerate lines with
/// [DegenerateError::ZeroLengthLine].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line<T = f64> {
    pub p1: Vector2<T>,
    pub p2: Vector2<T>,
}

impl<T> Line<T>
where
    T: Real,
{
    /// Create a new line through the two points given.
    pub fn new(p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Line { p1, p2 }
    }

    /// Create a new line through `(x1, y1)` and `(x2, y2)`.
    pub fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Line::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    /// Convert to the implicit form `A * x + B * y + C = 0` without
    /// normalisation (no unit length guarantee on `(A, B)`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use apollonius::core::math::Vector2;
    /// # use apollonius::shapes::Line;
    /// // the x axis: 0 * x + 2 * y + 0 = 0
    /// let line = Line::from_coords(0.0, 0.0, 2.0, 0.0);
    /// assert_eq!(line.to_abc(), (0.0, 2.0, 0.0));
    /// ```
    pub fn to_abc(&self) -> (T, T, T) {
        (
            self.p1.y - self.p2.y,
            self.p2.x - self.p1.x,
            self.p1.perp_dot(self.p2),
        )
    }

    /// Perpendicular distance from `point` to this line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use apollonius::core::math::Vector2;
    /// # use apollonius::shapes::Line;
    /// let line = Line::from_coords(0.0, 0.0, 2.0, 0.0);
    /// assert_eq!(line.distance_to(Vector2::new(1.0, 3.0)).unwrap(), 3.0);
    /// ```
    pub fn distance_to(&self, point: Vector2<T>) -> Result<T, DegenerateError> {
        if self.p1.fuzzy_eq(self.p2) {
            return Err(DegenerateError::ZeroLengthLine);
        }

        Ok((self.p2 - self.p1).normalize().perp_dot(point - self.p1).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn to_abc_satisfied_by_defining_points() {
        let line = Line::from_coords(-1.0, 2.0, 3.0, 5.0);
        let (a, b, c) = line.to_abc();
        assert_fuzzy_eq!(a * line.p1.x + b * line.p1.y + c, 0.0);
        assert_fuzzy_eq!(a * line.p2.x + b * line.p2.y + c, 0.0);
    }

    #[test]
    fn distance_to_oblique_line() {
        // line y = x, point (0, 2) is sqrt(2) away
        let line = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        let d = line.distance_to(vec2(0.0, 2.0)).unwrap();
        assert_fuzzy_eq!(d, 2.0f64.sqrt());
    }

    #[test]
    fn distance_to_degenerate_line_errors() {
        let line = Line::from_coords(1.0, 1.0, 1.0, 1.0);
        assert_eq!(
            line.distance_to(vec2(0.0, 0.0)),
            Err(DegenerateError::ZeroLengthLine)
        );
    }
}
