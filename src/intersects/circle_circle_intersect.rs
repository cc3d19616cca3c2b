use crate::core::math::{Vector2, dist_squared};
use crate::core::traits::Real;
use crate::shapes::Circle;

/// Holds the result of finding the intersect between two circles.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    /// No intersects found. Also returned for fuzzy coincident centers,
    /// identical and concentric circles are not distinguished from disjoint
    /// ones.
    NoIntersect,
    /// One tangent intersect point found.
    TangentIntersect {
        /// Holds the tangent intersect point.
        point: Vector2<T>,
    },
    /// Simple case of two intersect points found.
    TwoIntersects {
        /// Holds the first intersect point, offset from the chord foot point
        /// by the clockwise perpendicular of the center direction.
        point1: Vector2<T>,
        /// Holds the second intersect point, offset by the counter clockwise
        /// perpendicular.
        point2: Vector2<T>,
    },
}

/// Finds the intersects between two circles.
///
/// Classification runs in a fixed sequence, each boundary test using the
/// fuzzy epsilon on squared distances: coincident centers, touching outside,
/// disjoint outside, touching inside, disjoint inside, and finally the
/// proper two point intersection derived from the law of cosines. For two
/// points, the [Vector2::rotate90] offset comes first and the
/// [Vector2::rotate270] offset second, callers may rely on that order.
pub fn circle_circle_intr<T>(c1: Circle<T>, c2: Circle<T>) -> CircleCircleIntr<T>
where
    T: Real,
{
    use CircleCircleIntr::*;

    let dist2 = dist_squared(c1.center, c2.center);
    if dist2.fuzzy_eq_zero() {
        return NoIntersect;
    }

    // check touching outside, tangent point divides the center segment at
    // distance r1 from the first center
    let rsum = c1.radius + c2.radius;
    let rsum2 = rsum * rsum;

    if dist2.fuzzy_eq(rsum2) {
        return TangentIntersect {
            point: (c1.center * c2.radius + c2.center * c1.radius) / rsum,
        };
    }
    if dist2 > rsum2 {
        return NoIntersect;
    }

    // check touching inside
    // equal radii cannot reach the division below: they imply dist2 within
    // epsilon of zero, returned above
    let rdiff = c1.radius - c2.radius;
    let rdiff2 = rdiff * rdiff;

    if dist2.fuzzy_eq(rdiff2) {
        return TangentIntersect {
            point: c1.center + (c2.center - c1.center) * c1.radius / rdiff,
        };
    }
    if dist2 < rdiff2 {
        return NoIntersect;
    }

    // two points, angle at c1 between the center line and the chord from the
    // law of cosines
    let dist = dist2.sqrt();

    let cosa = (c1.radius * c1.radius + dist2 - c2.radius * c2.radius) / T::two() / c1.radius / dist;
    let sina = (T::one() - cosa * cosa).sqrt();

    let vec = (c2.center - c1.center) / dist;
    let o = c1.center + vec * c1.radius * cosa;

    TwoIntersects {
        point1: o + vec.rotate90() * sina * c1.radius,
        point2: o + vec.rotate270() * sina * c1.radius,
    }
}
