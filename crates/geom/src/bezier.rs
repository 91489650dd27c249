//! Adaptive flattening of bézier curves of arbitrary order.
//!
//! # Algorithm
//!
//! The control polygon of the curve is repeatedly subdivided at t = 0.5 with De
//! Casteljau's algorithm until the discrete second derivative of each sub-polygon
//! is small enough (see [`is_flat_enough`]). Sub-curves that are flat enough are
//! replaced by as many points as they have control points, obtained by smoothing the
//! control polygon of their two halves.
//!
//! The subdivision is a depth-first traversal driven by an explicit stack of owned
//! buffers rather than by recursion, and the buffers of processed sub-curves are kept
//! in a free list so that refining a curve does not allocate once the stack reached
//! its maximum size.
//!
//! Clamped uniform B-splines are first split into bézier curves at their knots (see
//! [`decompose_bspline`](crate::bspline::decompose_bspline)).

use crate::bspline::decompose_bspline;
use crate::scalar::Scalar;
use crate::Point;

use alloc::vec::Vec;

/// Returns whether the curve described by the control points is flat enough to be
/// approximated by its own control polygon.
///
/// The second derivative of the curve is approximated with finite differences. The curve
/// is flat enough if for every interior control point `p[i]`,
/// `|p[i - 1] - 2 * p[i] + p[i + 1]| <= 2 * tolerance`.
///
/// Curves with two control points or less are always flat.
pub fn is_flat_enough<S: Scalar>(control_points: &[Point<S>], tolerance: S) -> bool {
    let threshold = tolerance * tolerance * S::FOUR;

    for w in control_points.windows(3) {
        let v = w[0].to_vector() - w[1].to_vector() * S::TWO + w[2].to_vector();
        if v.square_length() > threshold {
            return false;
        }
    }

    true
}

/// Splits the control points of a bézier curve at t = 0.5.
///
/// `left` and `right` receive the control points of the two halves, `midpoints` is
/// scratch space. All slices must be at least as large as `control_points`.
pub fn subdivide<S: Scalar>(
    control_points: &[Point<S>],
    left: &mut [Point<S>],
    right: &mut [Point<S>],
    midpoints: &mut [Point<S>],
) {
    let count = control_points.len();
    midpoints[..count].copy_from_slice(control_points);

    for i in 0..count {
        left[i] = midpoints[0];
        right[count - i - 1] = midpoints[count - i - 1];

        for j in 0..(count - i - 1) {
            midpoints[j] = midpoints[j].lerp(midpoints[j + 1], S::HALF);
        }
    }
}

/// Appends all but the last point of the approximation of a flat curve.
///
/// Produces as many points as there are control points (the last one being the start
/// of the next curve).
fn approximate_flat<S: Scalar>(
    control_points: &[Point<S>],
    output: &mut Vec<Point<S>>,
    midpoints: &mut [Point<S>],
    left: &mut [Point<S>],
    right: &mut [Point<S>],
) {
    let count = control_points.len();

    subdivide(control_points, &mut left[..count], &mut right[..count], midpoints);

    // Chain the two halves: left[count - 1] == right[0].
    for i in 0..(count - 1) {
        left[count + i] = right[i + 1];
    }

    output.push(control_points[0]);

    for i in 1..(count - 1) {
        let index = 2 * i;
        let p = (left[index - 1].to_vector()
            + left[index].to_vector() * S::TWO
            + left[index + 1].to_vector())
            * S::QUARTER;
        output.push(p.to_point());
    }
}

/// Piecewise-linear approximation of bézier curves and B-splines.
///
/// The approximator owns the scratch memory used during the subdivision. Reusing it for
/// several curves avoids most allocations.
///
/// ## Example
///
/// ```
/// use sliderpath_geom::{point, BezierApproximator};
///
/// let mut approximator = BezierApproximator::new();
/// let mut polyline = Vec::new();
///
/// // A cubic bézier curve.
/// approximator.approximate(
///     &[point(0.0, 0.0), point(0.0, 100.0), point(100.0, 100.0), point(100.0, 0.0)],
///     0,
///     0.25,
///     &mut polyline,
/// );
///
/// assert_eq!(polyline.first(), Some(&point(0.0, 0.0)));
/// assert_eq!(polyline.last(), Some(&point(100.0, 0.0)));
/// ```
pub struct BezierApproximator<S> {
    to_flatten: Vec<(Vec<Point<S>>, u32)>,
    free_buffers: Vec<Vec<Point<S>>>,
    midpoints: Vec<Point<S>>,
    left: Vec<Point<S>>,
    right: Vec<Point<S>>,
    max_depth: u32,
    max_curves: usize,
}

impl<S: Scalar> BezierApproximator<S> {
    /// Default value for the maximum subdivision depth.
    pub const DEFAULT_MAX_DEPTH: u32 = 32;

    /// Default value for the maximum number of flat curves emitted per approximation.
    pub const DEFAULT_MAX_CURVES: usize = 1 << 16;

    pub fn new() -> Self {
        BezierApproximator {
            to_flatten: Vec::new(),
            free_buffers: Vec::new(),
            midpoints: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_curves: Self::DEFAULT_MAX_CURVES,
        }
    }

    /// Sets how many times a curve may be split before it is accepted regardless of its
    /// flatness.
    ///
    /// Subdivision converges for any finite input, the limit only matters for inputs of
    /// extreme magnitude where floating point precision runs out.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    /// Sets how many flat curves a single call to `approximate` may produce.
    ///
    /// Once the pending and emitted curves reach this number, curves are no longer
    /// split. The output of one call then holds at most
    /// `max(max_curves, pieces) * (order) + 1` points, `pieces` being the number of
    /// bézier pieces of the input.
    #[inline]
    pub fn with_max_curves(mut self, max_curves: usize) -> Self {
        self.max_curves = max_curves;
        self
    }

    #[inline]
    pub fn max_curves(&self) -> usize {
        self.max_curves
    }

    #[inline]
    pub fn set_max_curves(&mut self, max_curves: usize) {
        self.max_curves = max_curves;
    }

    /// Appends the approximation of a curve to `output`.
    ///
    /// If `0 < degree < control_points.len() - 1`, the control points describe a clamped
    /// uniform B-spline of polynomial order `degree`. Otherwise they describe a single
    /// bézier curve of order `control_points.len() - 1`.
    ///
    /// The first and last appended points are exactly the first and last control points.
    pub fn approximate(
        &mut self,
        control_points: &[Point<S>],
        degree: usize,
        tolerance: S,
        output: &mut Vec<Point<S>>,
    ) {
        let n = match control_points.len() {
            0 => return,
            1 => {
                output.push(control_points[0]);
                return;
            }
            len => len - 1,
        };

        self.to_flatten.clear();

        let p = match decompose_bspline(control_points, degree) {
            Some(curves) => {
                // Reverse the stack so that the curves are processed in order.
                for curve in curves.into_iter().rev() {
                    self.to_flatten.push((curve, 0));
                }
                degree
            }
            None => {
                let mut buffer = self.take_buffer();
                buffer.extend_from_slice(control_points);
                self.to_flatten.push((buffer, 0));
                n
            }
        };

        let count = p + 1;
        self.midpoints.resize(count, Point::origin());
        self.right.resize(count, Point::origin());
        self.left.resize(count * 2 - 1, Point::origin());

        let mut emitted = 0;
        let mut warned = false;
        while let Some((mut parent, depth)) = self.to_flatten.pop() {
            let flat = is_flat_enough(&parent, tolerance);
            // Splitting adds one curve to the ones that are pending or emitted.
            let over_budget = emitted + self.to_flatten.len() + 1 >= self.max_curves;
            if flat || depth >= self.max_depth || over_budget {
                if !flat && !warned {
                    warned = true;
                    log::warn!(
                        "Bézier subdivision stopped at depth {} after {} curves (limits: depth {}, {} curves), accepting curves that are not flat",
                        depth,
                        emitted,
                        self.max_depth,
                        self.max_curves
                    );
                }

                approximate_flat(
                    &parent,
                    output,
                    &mut self.midpoints,
                    &mut self.left,
                    &mut self.right,
                );

                emitted += 1;
                self.free_buffers.push(parent);
                continue;
            }

            let mut right_child = self.take_buffer();
            right_child.resize(count, Point::origin());
            subdivide(
                &parent,
                &mut self.left[..count],
                &mut right_child,
                &mut self.midpoints,
            );

            // Reuse the parent's buffer for the left child.
            parent.copy_from_slice(&self.left[..count]);

            self.to_flatten.push((right_child, depth + 1));
            self.to_flatten.push((parent, depth + 1));
        }

        output.push(control_points[n]);
    }

    fn take_buffer(&mut self) -> Vec<Point<S>> {
        let mut buffer = self.free_buffers.pop().unwrap_or_default();
        buffer.clear();
        buffer
    }
}

impl<S: Scalar> Default for BezierApproximator<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the piecewise-linear approximation of a bézier curve.
///
/// Convenience wrapper around [`BezierApproximator`], which should be preferred when
/// approximating many curves.
pub fn approximate_bezier<S: Scalar>(control_points: &[Point<S>], tolerance: S) -> Vec<Point<S>> {
    let mut output = Vec::new();
    BezierApproximator::new().approximate(control_points, 0, tolerance, &mut output);

    output
}
