//! Circular arcs passing through three points.

use crate::scalar::Scalar;
use crate::{point, Point};

use alloc::vec::Vec;

/// A circular arc defined by its center, radius and angles.
///
/// The arc starts at `start_angle` and sweeps `sweep_angle` radians, a negative sweep
/// meaning a clockwise rotation (in a y-up coordinate system).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CircularArc<S> {
    pub center: Point<S>,
    pub radius: S,
    pub start_angle: S,
    pub sweep_angle: S,
}

impl<S: Scalar> CircularArc<S> {
    /// Upper bound of `point_count`.
    pub const MAX_POINT_COUNT: usize = 1 << 16;

    /// Fits the circle passing through `a`, `b` and `c` and returns the arc going from `a`
    /// to `c` through `b`.
    ///
    /// Returns `None` if the triangle formed by the three points is degenerate (two points
    /// are coincident or all three points are collinear), in which case the points can't
    /// be represented by a circular arc.
    pub fn through(a: Point<S>, b: Point<S>, c: Point<S>) -> Option<Self> {
        let a_sq = (b - c).square_length();
        let b_sq = (a - c).square_length();
        let c_sq = (a - b).square_length();

        if a_sq.is_approx_zero() || b_sq.is_approx_zero() || c_sq.is_approx_zero() {
            return None;
        }

        // Barycentric weights of the circumcenter.
        let s = a_sq * (b_sq + c_sq - a_sq);
        let t = b_sq * (a_sq + c_sq - b_sq);
        let u = c_sq * (a_sq + b_sq - c_sq);

        let sum = s + t + u;

        if sum.is_approx_zero() || !sum.is_finite() {
            return None;
        }

        let center = ((a.to_vector() * s + b.to_vector() * t + c.to_vector() * u) / sum).to_point();
        let da = a - center;
        let dc = c - center;

        let radius = da.length();

        let start_angle = da.y.atan2(da.x);
        let mut end_angle = dc.y.atan2(dc.x);

        let tau = S::PI() * S::TWO;
        while end_angle < start_angle {
            end_angle += tau;
        }

        let mut sweep_angle = end_angle - start_angle;

        // Decide in which direction to draw the circle, depending on which side of
        // the line going from a to c b lies.
        let ac = c - a;
        let ortho_ac = crate::vector(ac.y, -ac.x);
        if ortho_ac.dot(b - a) < S::ZERO {
            sweep_angle = -(tau - sweep_angle);
        }

        Some(CircularArc {
            center,
            radius,
            start_angle,
            sweep_angle,
        })
    }

    /// Sample the arc at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let theta = self.start_angle + self.sweep_angle * t;
        point(
            self.center.x + theta.cos() * self.radius,
            self.center.y + theta.sin() * self.radius,
        )
    }

    /// Length of the arc.
    #[inline]
    pub fn length(&self) -> S {
        self.sweep_angle.abs() * self.radius
    }

    /// Computes the number of points needed so that the distance between the arc and its
    /// chords stays below the tolerance threshold.
    ///
    /// The angle subtended by a chord deviating from the arc by exactly `tolerance` is
    /// `2 * acos(1 - tolerance / radius)`. Arcs which radius is smaller than half of the
    /// tolerance are approximated with a single chord. The count never exceeds
    /// `MAX_POINT_COUNT`, which very large arcs and tiny tolerances would otherwise
    /// require.
    pub fn point_count(&self, tolerance: S) -> usize {
        if S::TWO * self.radius <= tolerance {
            return 2;
        }

        let step = S::TWO * (S::ONE - tolerance / self.radius).acos();
        let amount = (self.sweep_angle.abs() / step).ceil();

        // Also catches a zero step, when `tolerance / radius` is below the precision of S.
        if !(amount < S::from_usize(Self::MAX_POINT_COUNT)) {
            return Self::MAX_POINT_COUNT;
        }

        amount.to_usize().unwrap_or(2).max(2)
    }

    /// Appends the approximation of the arc to `output`.
    ///
    /// The points are evenly spaced in angle. The first and last points are exactly
    /// `from` and `to`, which should be the endpoints the arc was fitted to.
    pub fn for_each_flattened<F>(&self, tolerance: S, from: Point<S>, to: Point<S>, callback: &mut F)
    where
        F: FnMut(Point<S>),
    {
        let count = self.point_count(tolerance);
        let last = S::from_usize(count - 1);

        callback(from);
        for i in 1..(count - 1) {
            callback(self.sample(S::from_usize(i) / last));
        }
        callback(to);
    }
}

/// Appends the approximation of the circular arc going from `a` to `c` through `b` to
/// `output`.
///
/// Returns `false` without modifying `output` if the points can't be represented by a
/// circular arc (see [`CircularArc::through`]). It is then up to the caller to approximate
/// the points with another method.
pub fn approximate_circular_arc<S: Scalar>(
    a: Point<S>,
    b: Point<S>,
    c: Point<S>,
    tolerance: S,
    output: &mut Vec<Point<S>>,
) -> bool {
    match CircularArc::through(a, b, c) {
        Some(arc) => {
            arc.for_each_flattened(tolerance, a, c, &mut |p| output.push(p));
            true
        }
        None => false,
    }
}
