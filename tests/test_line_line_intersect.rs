use apollonius::core::math::Vector2;
use apollonius::intersects::{LineLineIntr::*, line_line_intr};
use apollonius::shapes::Line;

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (NoIntersect, NoIntersect) => {}
            (OneIntersect { point: a1 }, OneIntersect { point: a2 }) if a1.fuzzy_eq(a2) => {}
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

#[test]
fn one_intersect_crossing_diagonals() {
    let l1 = Line::from_coords(-1.0, -1.0, 1.0, 1.0);
    let l2 = Line::from_coords(-1.0, 1.0, 1.0, -1.0);
    let result = line_line_intr(l1, l2);
    assert_case_eq!(
        result,
        OneIntersect {
            point: Vector2::new(0.0, 0.0)
        }
    );
}

#[test]
fn one_intersect_lies_on_both_lines() {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8};

    let crossing = Vector2::new(1.0, 2.0);
    let l1 = Line::from_coords(-5.0, 2.0, 7.0, 2.0);

    for &angle in &[FRAC_PI_8, FRAC_PI_6, FRAC_PI_4, FRAC_PI_3, FRAC_PI_2] {
        let dir = Vector2::new(angle.cos(), angle.sin());
        let l2 = Line::new(crossing, crossing + dir);
        if let OneIntersect { point } = line_line_intr(l1, l2) {
            assert!(point.fuzzy_eq(crossing));
            assert!(l1.distance_to(point).unwrap() <= 1e-8);
            assert!(l2.distance_to(point).unwrap() <= 1e-8);
        } else {
            panic!("expected one intersect at angle {}", angle);
        }
    }
}

#[test]
fn parallel_lines_no_intersect() {
    let l1 = Line::from_coords(0.0, 0.0, 1.0, 0.0);
    let l2 = Line::from_coords(0.0, 1.0, 1.0, 1.0);
    let result = line_line_intr(l1, l2);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn coincident_lines_no_intersect() {
    // coincident lines are not detected as a separate case
    let l1 = Line::from_coords(0.0, 0.0, 1.0, 1.0);
    let result = line_line_intr(l1, l1);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn nearly_parallel_within_epsilon_no_intersect() {
    let l1 = Line::from_coords(0.0, 0.0, 1.0, 0.0);
    let l2 = Line::from_coords(0.0, 1.0, 1.0, 1.0 + 1e-9);
    let result = line_line_intr(l1, l2);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn degenerate_line_no_intersect() {
    // a zero length line has all zero implicit coefficients and falls into
    // the parallel case
    let l1 = Line::from_coords(1.0, 1.0, 1.0, 1.0);
    let l2 = Line::from_coords(0.0, 0.0, 1.0, 0.0);
    let result = line_line_intr(l1, l2);
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn idempotent_for_identical_inputs() {
    let l1 = Line::from_coords(-3.0, 0.5, 2.0, 4.0);
    let l2 = Line::from_coords(1.0, -2.0, 0.5, 5.0);
    match (line_line_intr(l1, l2), line_line_intr(l1, l2)) {
        (OneIntersect { point: a }, OneIntersect { point: b }) => assert_eq!(a, b),
        _ => panic!("expected one intersect from both calls"),
    }
}
