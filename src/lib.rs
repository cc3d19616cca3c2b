//! apollonius is a small planar geometry kernel: generic 2D vector
//! arithmetic plus closed form intersection functions between lines and
//! circles, and constructions derived from them (perpendicular bisector and
//! the similitude circle used for Apollonius style tangency problems).
//!
//! All boundary classification (tangent vs. crossing vs. disjoint, parallel
//! vs. crossing) is resolved deterministically with the fixed fuzzy epsilon
//! from [FuzzyEq::fuzzy_epsilon](crate::core::traits::FuzzyEq::fuzzy_epsilon).
//! Two point results are ordered by fixed tie break rules so identical
//! inputs always produce identical outputs.
//!
//! Functions are generic over the scalar type through
//! [Real](crate::core::traits::Real), implemented for `f32` and `f64`.
//!
//! # Examples
//!
//! ```
//! use apollonius::core::math::Vector2;
//! use apollonius::intersects::{CircleCircleIntr, circle_circle_intr};
//! use apollonius::shapes::Circle;
//!
//! // externally tangent circles touch at a single point
//! let c1 = Circle::from_coords(0.0, 0.0, 1.0);
//! let c2 = Circle::from_coords(3.0, 0.0, 2.0);
//! if let CircleCircleIntr::TangentIntersect { point } = circle_circle_intr(c1, c2) {
//!     assert!(point.fuzzy_eq(Vector2::new(1.0, 0.0)));
//! } else {
//!     unreachable!("expected tangent intersect");
//! }
//! ```
#[macro_use]
mod macros;

pub mod constructions;
pub mod core;
pub mod intersects;
pub mod shapes;

mod errors;
pub use crate::errors::DegenerateError;
