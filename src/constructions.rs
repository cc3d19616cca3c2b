//! Constructions derived from the lower primitives: perpendicular bisector
//! and the similitude circle of two circles.
use crate::core::math::{Vector2, dist, midpoint};
use crate::core::traits::Real;
use crate::errors::DegenerateError;
use crate::shapes::{Circle, Line};

/// Perpendicular bisector of the segment from `p1` to `p2`.
///
/// The result passes through the segment midpoint with direction
/// `rotate90(p2 - p1)`. Every point on it is equidistant from `p1` and `p2`.
/// For coincident input points the result is a degenerate line (both
/// defining points equal to the input point).
///
/// # Examples
///
/// ```
/// # use apollonius::core::math::Vector2;
/// # use apollonius::constructions::equidistant_line;
/// let bisector = equidistant_line(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0));
/// assert!(bisector.p1.fuzzy_eq(Vector2::new(1.0, 0.0)));
/// ```
pub fn equidistant_line<T>(p1: Vector2<T>, p2: Vector2<T>) -> Line<T>
where
    T: Real,
{
    let o = midpoint(p1, p2);
    Line::new(o, o + (p2 - p1).rotate90())
}

/// Constructs the circle through the two similitude points of `c1` and `c2`.
///
/// The internal similitude point divides the center segment in the ratio of
/// the radii, the external one divides it externally in the same ratio. The
/// result circle is centered on the line through both centers and has the
/// two similitude points as diameter endpoints, which makes it the base
/// circle for Apollonius style tangency constructions.
///
/// The circles may be passed in either order, internally they are relabeled
/// so the smaller radius comes first.
///
/// Returns [DegenerateError::CoincidentCenters] when the centers fuzzy
/// coincide and [DegenerateError::EqualRadii] when the radii fuzzy coincide
/// (the external similitude point recedes to infinity).
pub fn equiangle_circle<T>(c1: Circle<T>, c2: Circle<T>) -> Result<Circle<T>, DegenerateError>
where
    T: Real,
{
    if c1.radius.fuzzy_eq(c2.radius) {
        return Err(DegenerateError::EqualRadii);
    }

    // relabel so c1 is the smaller circle
    let (c1, c2) = if c2.radius < c1.radius {
        (c2, c1)
    } else {
        (c1, c2)
    };

    let d = dist(c1.center, c2.center);
    if d.fuzzy_eq_zero() {
        return Err(DegenerateError::CoincidentCenters);
    }

    let vec = (c2.center - c1.center) / d;

    let din = c1.radius * d / (c2.radius + c1.radius);
    let dout = c1.radius * d / (c2.radius - c1.radius);

    let radius = (din + dout) / T::two();
    Ok(Circle::new(c1.center - vec * (radius - din), radius))
}
