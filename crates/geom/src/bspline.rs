//! Decomposition of clamped uniform B-splines into bézier curves.

use crate::scalar::Scalar;
use crate::Point;

use alloc::vec::Vec;

/// Splits a clamped uniform B-spline of polynomial order `degree` into a sequence of
/// bézier curves of the same degree, one per knot span.
///
/// The knots are inserted with Boehm's algorithm. Each insertion destructively blends a
/// working copy of the control points, the provided slice is left untouched.
///
/// Returns `None` if the degree is zero or not smaller than the order of the control
/// polygon (`control_points.len() - 1`), in which case the whole control polygon is a
/// single bézier curve.
///
/// Every returned curve has `degree + 1` control points, the last point of a curve being
/// the first point of the next one.
pub fn decompose_bspline<S: Scalar>(
    control_points: &[Point<S>],
    degree: usize,
) -> Option<Vec<Vec<Point<S>>>> {
    if control_points.is_empty() {
        return None;
    }

    let n = control_points.len() - 1;
    let p = degree;
    if p == 0 || p >= n {
        return None;
    }

    let mut points = control_points.to_vec();
    let mut curves = Vec::with_capacity(n - p + 1);

    for i in 0..(n - p) {
        let mut sub_bezier = Vec::with_capacity(p + 1);
        sub_bezier.push(points[i]);

        for j in 0..(p - 1) {
            sub_bezier.push(points[i + 1]);

            for k in 1..(p - j) {
                let l = S::from_usize(k.min(n - p - i));
                let blended = (points[i + k].to_vector() * l + points[i + k + 1].to_vector())
                    / (l + S::ONE);
                points[i + k] = blended.to_point();
            }
        }

        sub_bezier.push(points[i + 1]);
        curves.push(sub_bezier);
    }

    curves.push(points[(n - p)..].to_vec());

    Some(curves)
}

#[cfg(test)]
use crate::point;

#[test]
fn degenerate_degrees() {
    let points = [point(0.0, 0.0), point(1.0, 1.0), point(2.0, 0.0)];
    assert!(decompose_bspline(&points, 0).is_none());
    assert!(decompose_bspline(&points, 2).is_none());
    assert!(decompose_bspline(&points, 5).is_none());
    assert!(decompose_bspline::<f64>(&[], 1).is_none());
}

#[test]
fn linear_bspline_is_the_control_polygon() {
    let points = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(20.0, 10.0),
    ];
    let curves = decompose_bspline(&points, 1).unwrap();

    assert_eq!(curves.len(), 3);
    for (i, curve) in curves.iter().enumerate() {
        assert_eq!(curve, &alloc::vec![points[i], points[i + 1]]);
    }
}

#[test]
fn quadratic_bspline() {
    let points = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(20.0, 10.0),
    ];
    let curves = decompose_bspline(&points, 2).unwrap();

    // The single internal knot sits half way between the two inner control points.
    assert_eq!(curves.len(), 2);
    assert_eq!(
        curves[0],
        alloc::vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 5.0)]
    );
    assert_eq!(
        curves[1],
        alloc::vec![point(10.0, 5.0), point(10.0, 10.0), point(20.0, 10.0)]
    );

    // The input is not modified.
    assert_eq!(points[1], point(10.0, 0.0));
}

#[test]
fn pieces_are_chained() {
    let points = [
        point(0.0, 0.0),
        point(3.0, 7.0),
        point(9.0, -2.0),
        point(12.0, 4.0),
        point(15.0, 15.0),
        point(21.0, 0.0),
    ];
    let curves = decompose_bspline(&points, 3).unwrap();

    assert_eq!(curves.len(), 3);
    for curve in &curves {
        assert_eq!(curve.len(), 4);
    }
    for pair in curves.windows(2) {
        assert_eq!(pair[0].last(), pair[1].first());
    }
    assert_eq!(curves[0][0], points[0]);
    assert_eq!(*curves[2].last().unwrap(), points[5]);
}
