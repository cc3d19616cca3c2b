//! Pairwise intersection functions over lines and circles.
//!
//! Every function classifies boundary cases (tangent vs. crossing vs.
//! disjoint) with the fixed fuzzy epsilon from
//! [FuzzyEq::fuzzy_epsilon](crate::core::traits::FuzzyEq::fuzzy_epsilon) and
//! returns a case enum. The two point cases are ordered deterministically,
//! see each function for its tie break rule.
mod circle_circle_intersect;
mod line_circle_intersect;
mod line_line_intersect;

pub use circle_circle_intersect::{CircleCircleIntr, circle_circle_intr};
pub use line_circle_intersect::{LineCircleIntr, circle_line_intr, line_circle_intr};
pub use line_line_intersect::{LineLineIntr, line_line_intr};
