use super::Vector2;
use crate::core::traits::Real;

/// Distance squared between the points `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use apollonius::core::math::*;
/// assert_eq!(dist_squared(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)), 25.0);
/// ```
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Distance between the points `p0` and `p1`.
///
/// # Examples
///
/// ```
/// # use apollonius::core::math::*;
/// assert_eq!(dist(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)), 5.0);
/// ```
#[inline]
pub fn dist<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}
