//! Catmull-Rom splines.

use crate::scalar::Scalar;
use crate::Point;

use alloc::vec::Vec;

/// Default number of points generated per span.
pub const DEFAULT_DETAIL: usize = 50;

/// Evaluates the Catmull-Rom span going from `v2` to `v3` at `t`.
#[inline]
pub fn catmull_point<S: Scalar>(
    v1: Point<S>,
    v2: Point<S>,
    v3: Point<S>,
    v4: Point<S>,
    t: S,
) -> Point<S> {
    let t2 = t * t;
    let t3 = t2 * t;

    let (v1, v2, v3, v4) = (v1.to_vector(), v2.to_vector(), v3.to_vector(), v4.to_vector());

    let p = (v2 * S::TWO
        + (v3 - v1) * t
        + (v1 * S::TWO - v2 * S::FIVE + v3 * S::FOUR - v4) * t2
        + (v2 * S::THREE - v1 - v3 * S::THREE + v4) * t3)
        * S::HALF;

    p.to_point()
}

/// Appends the approximation of the Catmull-Rom spline interpolating `control_points`
/// to `output`.
///
/// Each span between two consecutive control points is sampled `detail` times at
/// regular parameter intervals. The missing neighbour before the first span is the
/// first point itself, and the one after the last span is mirrored from the last
/// span. Every control point appears exactly in the output.
///
/// With less than two control points, or a `detail` of zero, the control points are
/// copied unchanged.
pub fn approximate_catmull<S: Scalar>(
    control_points: &[Point<S>],
    detail: usize,
    output: &mut Vec<Point<S>>,
) {
    let n = control_points.len();
    if n < 2 || detail == 0 {
        output.extend_from_slice(control_points);
        return;
    }

    output.reserve((n - 1) * detail + 1);
    output.push(control_points[0]);

    let step = S::ONE / S::from_usize(detail);
    for i in 0..(n - 1) {
        let v2 = control_points[i];
        let v3 = control_points[i + 1];
        let v1 = if i > 0 { control_points[i - 1] } else { v2 };
        let v4 = if i + 2 < n {
            control_points[i + 2]
        } else {
            v3 + (v3 - v2)
        };

        for c in 1..detail {
            output.push(catmull_point(v1, v2, v3, v4, S::from_usize(c) * step));
        }
        output.push(v3);
    }
}
