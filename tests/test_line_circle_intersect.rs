use apollonius::DegenerateError;
use apollonius::core::math::Vector2;
use apollonius::intersects::{LineCircleIntr::*, circle_line_intr, line_circle_intr};
use apollonius::shapes::{Circle, Line};

macro_rules! assert_case_eq {
    ($left:expr, $right:expr) => {
        match ($left, $right) {
            (NoIntersect, NoIntersect) => {}
            (TangentIntersect { point: a1 }, TangentIntersect { point: a2 }) if a1.fuzzy_eq(a2) => {
            }
            (
                TwoIntersects {
                    point1: a1,
                    point2: b1,
                },
                TwoIntersects {
                    point1: a2,
                    point2: b2,
                },
            ) if a1.fuzzy_eq(a2) && b1.fuzzy_eq(b2) => {}
            _ => panic!(
                "intersect cases do not match: left: {:?}, right: {:?}",
                $left, $right
            ),
        };
    };
}

#[test]
fn no_intersect() {
    let circle = Circle::from_coords(0.0, 0.0, 1.0);
    let line = Line::from_coords(-2.0, 2.0, 2.0, 2.0);
    let result = circle_line_intr(circle, line).unwrap();
    assert_case_eq!(result, NoIntersect::<f64>);
}

#[test]
fn tangent_intersect_horizontal() {
    let circle = Circle::from_coords(0.0, 0.0, 1.0);
    let line = Line::from_coords(-2.0, 1.0, 2.0, 1.0);
    let result = circle_line_intr(circle, line).unwrap();
    assert_case_eq!(
        result,
        TangentIntersect {
            point: Vector2::new(0.0, 1.0)
        }
    );
}

#[test]
fn tangent_intersect_vertical() {
    let circle = Circle::from_coords(2.0, 3.0, 2.0);
    let line = Line::from_coords(0.0, -1.0, 0.0, 5.0);
    let result = circle_line_intr(circle, line).unwrap();
    assert_case_eq!(
        result,
        TangentIntersect {
            point: Vector2::new(0.0, 3.0)
        }
    );
}

#[test]
fn two_intersects_direction_first() {
    let circle = Circle::from_coords(0.0, 0.0, 1.0);
    let line = Line::from_coords(-2.0, 0.0, 2.0, 0.0);
    let result = circle_line_intr(circle, line).unwrap();
    assert_case_eq!(
        result,
        TwoIntersects {
            point1: Vector2::new(1.0, 0.0),
            point2: Vector2::new(-1.0, 0.0)
        }
    );
}

#[test]
fn two_intersects_reversed_direction_flips_order() {
    let circle = Circle::from_coords(0.0, 0.0, 1.0);
    let line = Line::from_coords(2.0, 0.0, -2.0, 0.0);
    let result = circle_line_intr(circle, line).unwrap();
    assert_case_eq!(
        result,
        TwoIntersects {
            point1: Vector2::new(-1.0, 0.0),
            point2: Vector2::new(1.0, 0.0)
        }
    );
}

#[test]
fn two_intersects_oblique() {
    let circle = Circle::from_coords(0.0, 0.0, 5.0);
    let line = Line::from_coords(-10.0, -10.0, 10.0, 10.0);
    let offset = 5.0 / 2.0f64.sqrt();
    let result = circle_line_intr(circle, line).unwrap();
    assert_case_eq!(
        result,
        TwoIntersects {
            point1: Vector2::new(offset, offset),
            point2: Vector2::new(-offset, -offset)
        }
    );
}

#[test]
fn line_circle_intr_is_symmetric_call() {
    let circle = Circle::from_coords(0.5, 0.25, 2.0);
    let line = Line::from_coords(-4.0, -1.0, 4.0, 1.5);
    match (
        circle_line_intr(circle, line).unwrap(),
        line_circle_intr(line, circle).unwrap(),
    ) {
        (
            TwoIntersects {
                point1: a1,
                point2: b1,
            },
            TwoIntersects {
                point1: a2,
                point2: b2,
            },
        ) => {
            assert_eq!(a1, a2);
            assert_eq!(b1, b2);
        }
        _ => panic!("expected two intersects from both calls"),
    }
}

#[test]
fn zero_length_line_errors() {
    let circle = Circle::from_coords(0.0, 0.0, 1.0);
    let line = Line::from_coords(1.0, 1.0, 1.0, 1.0);
    assert_eq!(
        circle_line_intr(circle, line).unwrap_err(),
        DegenerateError::ZeroLengthLine
    );
}
