use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::shapes::Line;

/// Holds the result of finding the intersect between two infinite lines.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Lines are parallel or coincident (coincident lines are not detected
    /// as a separate case).
    NoIntersect,
    /// Lines cross at a single point.
    OneIntersect {
        /// Holds the intersect point.
        point: Vector2<T>,
    },
}

/// Finds the intersect between two infinite lines.
///
/// Both lines are converted to the implicit form `A * x + B * y + C = 0` and
/// the linear system is solved by determinant. A determinant within the fuzzy
/// epsilon of zero classifies the lines as parallel and returns
/// [LineLineIntr::NoIntersect], coincident lines are not distinguished from
/// parallel ones. A degenerate line (both points coincident) yields all zero
/// coefficients and falls into the parallel case.
///
/// # Examples
///
/// ```
/// # use apollonius::core::math::Vector2;
/// # use apollonius::intersects::{LineLineIntr, line_line_intr};
/// # use apollonius::shapes::Line;
/// let l1 = Line::from_coords(-1.0, -1.0, 1.0, 1.0);
/// let l2 = Line::from_coords(-1.0, 1.0, 1.0, -1.0);
/// if let LineLineIntr::OneIntersect { point } = line_line_intr(l1, l2) {
///     assert!(point.fuzzy_eq(Vector2::zero()));
/// } else {
///     unreachable!("expected one intersect point");
/// }
/// ```
pub fn line_line_intr<T>(line1: Line<T>, line2: Line<T>) -> LineLineIntr<T>
where
    T: Real,
{
    use LineLineIntr::*;

    let (a1, b1, c1) = line1.to_abc();
    let (a2, b2, c2) = line2.to_abc();

    let det = a1 * b2 - a2 * b1;

    if det.fuzzy_eq_zero() {
        return NoIntersect;
    }

    OneIntersect {
        point: Vector2::new(c2 * b1 - c1 * b2, a2 * c1 - a1 * c2) / det,
    }
}
