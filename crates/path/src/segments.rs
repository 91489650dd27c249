use crate::{ControlPoint, PathType};

use std::ops::Range;

/// A maximal run of control points approximated with the same kind of curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<'l> {
    pub kind: PathType,
    /// Range of the segment's control points in the whole control point list.
    pub range: Range<usize>,
    pub points: &'l [ControlPoint],
}

impl<'l> Segment<'l> {
    /// Iterates over the positions of the segment's control points.
    pub fn positions(&self) -> impl Iterator<Item = crate::math::Point> + 'l {
        self.points.iter().map(|cp| cp.position)
    }
}

/// Iterates over the segments of a control point list.
///
/// Consecutive segments share one control point: the tagged point that ends a
/// segment starts the next one. A tagged last control point does not start a
/// segment of its own, and a list of a single point yields a single segment.
#[derive(Clone)]
pub struct Segments<'l> {
    control_points: &'l [ControlPoint],
    start: usize,
}

impl<'l> Segments<'l> {
    pub fn new(control_points: &'l [ControlPoint]) -> Self {
        Segments {
            control_points,
            start: 0,
        }
    }
}

impl<'l> Iterator for Segments<'l> {
    type Item = Segment<'l>;

    fn next(&mut self) -> Option<Segment<'l>> {
        let len = self.control_points.len();
        if self.start >= len {
            return None;
        }

        let start = self.start;
        let kind = self.control_points[start].kind.unwrap_or_default();

        let end = self.control_points[start + 1..]
            .iter()
            .position(|cp| cp.kind.is_some())
            .map(|offset| start + 1 + offset)
            .unwrap_or(len - 1);

        self.start = if end + 1 >= len { len } else { end };

        let range = start..(end + 1);
        Some(Segment {
            kind,
            points: &self.control_points[range.clone()],
            range,
        })
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn ranges(control_points: &[ControlPoint]) -> Vec<(PathType, Range<usize>)> {
    Segments::new(control_points)
        .map(|segment| (segment.kind, segment.range))
        .collect()
}

#[test]
fn partition() {
    let control_points = [
        ControlPoint::new(point(0.0, 0.0), PathType::Linear),
        ControlPoint::untagged(point(1.0, 0.0)),
        ControlPoint::new(point(2.0, 0.0), PathType::PerfectCurve),
        ControlPoint::untagged(point(3.0, 1.0)),
        ControlPoint::untagged(point(4.0, 0.0)),
        ControlPoint::new(point(5.0, 0.0), PathType::Catmull),
        ControlPoint::new(point(6.0, 0.0), PathType::Bezier),
        ControlPoint::untagged(point(7.0, 1.0)),
    ];

    assert_eq!(
        ranges(&control_points),
        vec![
            (PathType::Linear, 0..3),
            (PathType::PerfectCurve, 2..6),
            (PathType::Catmull, 5..7),
            (PathType::Bezier, 6..8),
        ]
    );

    // Segment boundaries are shared.
    let segments: Vec<Segment> = Segments::new(&control_points).collect();
    for pair in segments.windows(2) {
        assert_eq!(pair[0].points.last(), pair[1].points.first());
    }
}

#[test]
fn untagged_first_point() {
    let control_points = [
        ControlPoint::untagged(point(0.0, 0.0)),
        ControlPoint::untagged(point(1.0, 1.0)),
        ControlPoint::untagged(point(2.0, 0.0)),
    ];

    assert_eq!(ranges(&control_points), vec![(PathType::Bezier, 0..3)]);
}

#[test]
fn degenerate_lists() {
    assert!(ranges(&[]).is_empty());

    let single = [ControlPoint::new(point(1.0, 1.0), PathType::Linear)];
    assert_eq!(ranges(&single), vec![(PathType::Linear, 0..1)]);

    // A tagged last point doesn't produce an extra segment.
    let control_points = [
        ControlPoint::new(point(0.0, 0.0), PathType::Linear),
        ControlPoint::untagged(point(1.0, 0.0)),
        ControlPoint::new(point(2.0, 0.0), PathType::Bezier),
    ];
    assert_eq!(ranges(&control_points), vec![(PathType::Linear, 0..3)]);

    let positions: Vec<_> = Segments::new(&control_points)
        .next()
        .unwrap()
        .positions()
        .collect();
    assert_eq!(positions, vec![point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0)]);
}
