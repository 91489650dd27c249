//! Piecewise-linear "approximation" of straight polylines.

use crate::Point;

use alloc::vec::Vec;

/// Appends the control points of a straight polyline to `output`.
///
/// A linear segment is its own approximation, so the points are copied
/// unchanged and in order. Empty and single point inputs are valid.
pub fn approximate_linear<S: Copy>(control_points: &[Point<S>], output: &mut Vec<Point<S>>) {
    output.extend_from_slice(control_points);
}

#[test]
fn identity() {
    use crate::point;

    let input = [point(1.0, 2.0), point(-3.0, 4.5)];
    let mut output = Vec::new();
    approximate_linear(&input, &mut output);
    assert_eq!(&output[..], &input[..]);

    let mut output: Vec<Point<f32>> = Vec::new();
    approximate_linear(&[], &mut output);
    assert!(output.is_empty());

    approximate_linear(&[point(7.0, 7.0)], &mut output);
    assert_eq!(output, alloc::vec![point(7.0, 7.0)]);
}
