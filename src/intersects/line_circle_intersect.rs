use crate::core::math::{Vector2, dist_squared};
use crate::core::traits::Real;
use crate::errors::DegenerateError;
use crate::shapes::{Circle, Line};

/// Holds the result of finding the intersect between a line and a circle.
#[derive(Debug, Copy, Clone)]
pub enum LineCircleIntr<T>
where
    T: Real,
{
    /// No intersects found.
    NoIntersect,
    /// One tangent intersect point found.
    TangentIntersect {
        /// Holds the tangent intersect point (foot of the center on the
        /// line).
        point: Vector2<T>,
    },
    /// Simple case of two intersect points found.
    TwoIntersects {
        /// Holds the first intersect point, along the line direction from
        /// the foot point.
        point1: Vector2<T>,
        /// Holds the second intersect point, opposite the line direction.
        point2: Vector2<T>,
    },
}

/// Finds the intersects between a circle and an infinite line.
///
/// The circle center is projected onto the line to get the foot point, the
/// squared foot distance is then classified against the squared radius with
/// the fuzzy epsilon: tangent within epsilon, no intersect beyond the
/// radius, two points otherwise. For two points the offset along the line
/// direction (`p1` toward `p2`) comes first and its [Vector2::rotate180]
/// opposite second, callers may rely on that order.
///
/// Returns [DegenerateError::ZeroLengthLine] when the line's defining points
/// fuzzy coincide.
///
/// # Examples
///
/// ```
/// # use apollonius::core::math::Vector2;
/// # use apollonius::intersects::{LineCircleIntr, circle_line_intr};
/// # use apollonius::shapes::{Circle, Line};
/// let circle = Circle::from_coords(0.0, 0.0, 1.0);
/// let line = Line::from_coords(-2.0, 0.0, 2.0, 0.0);
/// if let Ok(LineCircleIntr::TwoIntersects { point1, point2 }) = circle_line_intr(circle, line) {
///     assert!(point1.fuzzy_eq(Vector2::new(1.0, 0.0)));
///     assert!(point2.fuzzy_eq(Vector2::new(-1.0, 0.0)));
/// } else {
///     unreachable!("expected two intersect points");
/// }
/// ```
pub fn circle_line_intr<T>(
    circle: Circle<T>,
    line: Line<T>,
) -> Result<LineCircleIntr<T>, DegenerateError>
where
    T: Real,
{
    use LineCircleIntr::*;

    if line.p1.fuzzy_eq(line.p2) {
        return Err(DegenerateError::ZeroLengthLine);
    }

    let vec = (line.p2 - line.p1).normalize();
    let o = line.p1 + vec * vec.dot(circle.center - line.p1);

    let dist2 = dist_squared(o, circle.center);
    let r2 = circle.radius * circle.radius;

    if dist2.fuzzy_eq(r2) {
        return Ok(TangentIntersect { point: o });
    }
    if dist2 > r2 {
        return Ok(NoIntersect);
    }

    let len = (r2 - dist2).sqrt();

    Ok(TwoIntersects {
        point1: o + vec * len,
        point2: o + vec.rotate180() * len,
    })
}

/// Finds the intersects between an infinite line and a circle.
///
/// Symmetric to [circle_line_intr], identical result set and ordering.
#[inline]
pub fn line_circle_intr<T>(
    line: Line<T>,
    circle: Circle<T>,
) -> Result<LineCircleIntr<T>, DegenerateError>
where
    T: Real,
{
    circle_line_intr(circle, line)
}
