//! Move at a defined speed along a path.
//!
//! # Path walking
//!
//! ## Overview
//!
//! In principle, walking a path is similar to iterating over its vertices,
//! but instead of going from one vertex to the next, the walker makes it
//! possible to advance by a certain distance along the path.
//!
//! ## Example
//!
//! ```
//! use sliderpath_algorithms::walk::{RegularPattern, walk_along_path, WalkerEvent};
//! use sliderpath_algorithms::path::SliderPath;
//! use sliderpath_algorithms::math::Point;
//!
//! fn ticks_along_path(path: &SliderPath, ticks: &mut Vec<Point>) {
//!     let mut pattern = RegularPattern {
//!         callback: &mut |event: WalkerEvent| {
//!             ticks.push(event.position);
//!             true // Return true to continue walking the path.
//!         },
//!         // Invoke the callback above at a regular interval of 100 units.
//!         interval: 100.0,
//!     };
//!
//!     let start_offset = 0.0; // Start walking at the beginning of the path.
//!     walk_along_path(path, start_offset, &mut pattern);
//! }
//! ```

use crate::geom::{LineSegment, Scalar};
use crate::math::*;
use crate::path::SliderPath;

/// Walks along the path starting at offset `start` and applies a `Pattern`.
///
/// Distances are measured with the path's length table. Walking stops at the end
/// of the path, when the pattern returns `None` or when it returns a distance that
/// doesn't move forward. Paths of length zero and NaN offsets produce no event.
pub fn walk_along_path(path: &SliderPath, start: f64, pattern: &mut dyn Pattern) {
    let vertices = path.vertices();
    let lengths = path.cumulative_lengths();

    if start.is_nan() {
        return;
    }
    let mut next_distance = start.max(0.0);

    for i in 1..vertices.len() {
        let (d0, d1) = (lengths[i - 1], lengths[i]);
        if (d1 - d0).is_approx_zero() {
            continue;
        }

        let segment = LineSegment {
            from: vertices[i - 1],
            to: vertices[i],
        };
        let tangent = segment.tangent();

        while next_distance <= d1 {
            let t = (next_distance - d0) / (d1 - d0);
            let event = WalkerEvent {
                position: segment.sample(t),
                tangent,
                distance: next_distance,
            };

            let step = match pattern.next(event) {
                Some(step) => step,
                None => {
                    return;
                }
            };

            // Steps that are negative, NaN or lost to the precision of the current
            // distance don't move forward.
            let next = next_distance + step;
            if !(next > next_distance) {
                return;
            }
            next_distance = next;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WalkerEvent {
    pub position: Point,
    pub tangent: Vector,
    pub distance: f64,
}

/// Types implementing the `Pattern` can be used to walk along a path
/// at constant speed.
///
/// At each step, the pattern receives the position, tangent and already
/// traversed distance along the path and returns the distance until the
/// next step.
///
/// See the `RegularPattern` and `RepeatedPattern` implementations.
/// This trait is also implemented for all functions/closures with signature
/// `FnMut(WalkerEvent) -> Option<f64>`.
pub trait Pattern {
    /// This method is invoked at each step along the path.
    ///
    /// If this method returns None, path walking stops. Otherwise the returned
    /// value is the distance along the path to the next element in the pattern.
    fn next(&mut self, event: WalkerEvent) -> Option<f64>;
}

/// A simple pattern that invokes a callback at regular intervals.
///
/// If the callback returns false, path walking stops.
pub struct RegularPattern<Cb> {
    /// The function to call at each step.
    pub callback: Cb,
    /// A constant interval between each step.
    pub interval: f64,
}

impl<Cb> Pattern for RegularPattern<Cb>
where
    Cb: FnMut(WalkerEvent) -> bool,
{
    #[inline]
    fn next(&mut self, event: WalkerEvent) -> Option<f64> {
        if !(self.callback)(event) {
            return None;
        }
        Some(self.interval)
    }
}

/// A pattern that invokes a callback at a repeated sequence of
/// constant intervals.
///
/// If the callback returns false, path walking stops.
pub struct RepeatedPattern<'l, Cb> {
    /// The function to call at each step.
    pub callback: Cb,
    /// The repeated interval sequence.
    pub intervals: &'l [f64],
    /// The index of the next interval in the sequence.
    pub index: usize,
}

impl<'l, Cb> Pattern for RepeatedPattern<'l, Cb>
where
    Cb: FnMut(WalkerEvent) -> bool,
{
    #[inline]
    fn next(&mut self, event: WalkerEvent) -> Option<f64> {
        if !(self.callback)(event) || self.intervals.is_empty() {
            return None;
        }
        let idx = self.index % self.intervals.len();
        self.index += 1;
        Some(self.intervals[idx])
    }
}

impl<Cb> Pattern for Cb
where
    Cb: FnMut(WalkerEvent) -> Option<f64>,
{
    #[inline]
    fn next(&mut self, event: WalkerEvent) -> Option<f64> {
        (self)(event)
    }
}

#[cfg(test)]
use crate::path::{ApproximationOptions, ControlPoint, PathType};

#[cfg(test)]
fn polyline(points: &[Point]) -> SliderPath {
    let mut control_points = vec![ControlPoint::new(points[0], PathType::Linear)];
    control_points.extend(points[1..].iter().map(|p| ControlPoint::untagged(*p)));

    SliderPath::new(&control_points, None, ApproximationOptions::DEFAULT).unwrap()
}

#[test]
fn walk_square() {
    let expected = [
        (point(0.0, 0.0), vector(1.0, 0.0), 0.0),
        (point(2.0, 0.0), vector(1.0, 0.0), 2.0),
        (point(4.0, 0.0), vector(1.0, 0.0), 4.0),
        (point(6.0, 0.0), vector(1.0, 0.0), 6.0),
        (point(6.0, 2.0), vector(0.0, 1.0), 8.0),
        (point(6.0, 4.0), vector(0.0, 1.0), 10.0),
        (point(6.0, 6.0), vector(0.0, 1.0), 12.0),
        (point(4.0, 6.0), vector(-1.0, 0.0), 14.0),
        (point(2.0, 6.0), vector(-1.0, 0.0), 16.0),
        (point(0.0, 6.0), vector(-1.0, 0.0), 18.0),
        (point(0.0, 4.0), vector(0.0, -1.0), 20.0),
        (point(0.0, 2.0), vector(0.0, -1.0), 22.0),
        (point(0.0, 0.0), vector(0.0, -1.0), 24.0),
    ];

    let path = polyline(&[
        point(0.0, 0.0),
        point(6.0, 0.0),
        point(6.0, 6.0),
        point(0.0, 6.0),
        point(0.0, 0.0),
    ]);

    let mut i = 0;
    let mut pattern = RegularPattern {
        interval: 2.0,
        callback: |event: WalkerEvent| {
            assert!((event.position - expected[i].0).length() < 0.000001);
            assert_eq!(event.tangent, expected[i].1);
            assert_eq!(event.distance, expected[i].2);
            i += 1;
            true
        },
    };

    walk_along_path(&path, 0.0, &mut pattern);

    assert_eq!(i, expected.len());
}

#[test]
fn walk_with_leftover() {
    let expected = [
        (point(1.0, 0.0), vector(1.0, 0.0), 1.0),
        (point(4.0, 0.0), vector(1.0, 0.0), 4.0),
        (point(5.0, 2.0), vector(0.0, 1.0), 7.0),
        (point(5.0, 5.0), vector(0.0, 1.0), 10.0),
        (point(2.0, 5.0), vector(-1.0, 0.0), 13.0),
        (point(0.0, 4.0), vector(0.0, -1.0), 16.0),
        (point(0.0, 1.0), vector(0.0, -1.0), 19.0),
    ];

    let path = polyline(&[
        point(0.0, 0.0),
        point(5.0, 0.0),
        point(5.0, 5.0),
        point(0.0, 5.0),
        point(0.0, 0.0),
    ]);

    let mut i = 0;
    let mut pattern = RegularPattern {
        interval: 3.0,
        callback: |event: WalkerEvent| {
            assert!((event.position - expected[i].0).length() < 0.000001);
            assert_eq!(event.tangent, expected[i].1);
            assert_eq!(event.distance, expected[i].2);
            i += 1;
            true
        },
    };

    walk_along_path(&path, 1.0, &mut pattern);

    assert_eq!(i, expected.len());
}

#[test]
fn walk_starting_after() {
    // With a starting distance that is greater than the path, the
    // callback should never be called.
    let path = polyline(&[point(0.0, 0.0), point(5.0, 0.0)]);
    let cb = &mut |_event: WalkerEvent| -> Option<f64> { panic!() };
    walk_along_path(&path, 10.0, cb);
}

#[test]
fn walk_abort_early() {
    let path = polyline(&[point(0.0, 0.0), point(100.0, 0.0)]);

    let mut callback_counter = 0;
    let mut pattern = RegularPattern {
        interval: 3.0,
        callback: |_event: WalkerEvent| {
            callback_counter += 1;
            false
        },
    };

    walk_along_path(&path, 0.0, &mut pattern);

    assert_eq!(callback_counter, 1);
}

#[test]
fn walk_repeated_pattern() {
    let path = polyline(&[point(0.0, 0.0), point(10.0, 0.0)]);

    let mut distances = Vec::new();
    let mut pattern = RepeatedPattern {
        callback: |event: WalkerEvent| {
            distances.push(event.distance);
            true
        },
        intervals: &[1.0, 3.0],
        index: 0,
    };

    walk_along_path(&path, 0.0, &mut pattern);

    assert_eq!(distances, vec![0.0, 1.0, 4.0, 5.0, 8.0, 9.0]);
}

#[test]
fn walk_stops_on_non_positive_steps() {
    let path = polyline(&[point(0.0, 0.0), point(10.0, 0.0)]);

    let mut count = 0;
    walk_along_path(&path, 0.0, &mut |_event: WalkerEvent| -> Option<f64> {
        count += 1;
        Some(0.0)
    });

    assert_eq!(count, 1);
}

#[test]
fn walk_stops_on_steps_below_precision() {
    let path = polyline(&[point(0.0, 0.0), point(100.0, 0.0)]);

    let mut distances = Vec::new();
    walk_along_path(&path, 50.0, &mut |event: WalkerEvent| -> Option<f64> {
        distances.push(event.distance);
        Some(1e-20)
    });

    assert_eq!(distances, vec![50.0]);

    let mut count = 0;
    walk_along_path(&path, 0.0, &mut |_event: WalkerEvent| -> Option<f64> {
        count += 1;
        Some(f64::NAN)
    });

    assert_eq!(count, 1);
}
