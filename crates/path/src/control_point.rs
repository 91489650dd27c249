use crate::math::Point;

/// The kind of curve a segment of the path is approximated with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathType {
    /// A polyline going through every control point.
    Linear,
    /// The circular arc going through three control points.
    ///
    /// Segments that don't have exactly three control points, or which points are
    /// collinear, are approximated according to the `CircleFallback` option instead.
    PerfectCurve,
    /// A single bézier curve which order is given by the number of control points.
    Bezier,
    /// A clamped uniform B-spline of the given polynomial degree.
    ///
    /// A degree of zero, or a degree that isn't smaller than the number of control
    /// points minus one, describes a single bézier curve.
    BSpline { degree: u32 },
    /// A Catmull-Rom spline interpolating every control point.
    Catmull,
}

impl PathType {
    /// Shorthand for `PathType::BSpline { degree }`.
    #[inline]
    pub const fn bspline(degree: u32) -> Self {
        PathType::BSpline { degree }
    }
}

impl Default for PathType {
    fn default() -> Self {
        PathType::Bezier
    }
}

/// A point of the description of a path.
///
/// A control point that carries a path type starts a new segment of that type.
/// Untagged control points continue the current segment. The first control point
/// always starts the first segment, which is a bézier segment if the point is untagged.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ControlPoint {
    pub position: Point,
    pub kind: Option<PathType>,
}

impl ControlPoint {
    /// A control point starting a segment of the given type.
    #[inline]
    pub const fn new(position: Point, kind: PathType) -> Self {
        ControlPoint {
            position,
            kind: Some(kind),
        }
    }

    /// A control point continuing the current segment.
    #[inline]
    pub const fn untagged(position: Point) -> Self {
        ControlPoint {
            position,
            kind: None,
        }
    }
}

/// Builds the control points of a path of a single kind from a list of positions.
///
/// Two consecutive identical positions mark a segment boundary: the repeated position
/// is kept once and starts a new segment of the same kind. This is how bézier paths
/// made of several curves are usually stored.
pub fn control_points_from_positions(kind: PathType, positions: &[Point]) -> Vec<ControlPoint> {
    let mut control_points: Vec<ControlPoint> = Vec::with_capacity(positions.len());

    for &position in positions {
        match control_points.last_mut() {
            None => control_points.push(ControlPoint::new(position, kind)),
            Some(last) if last.position == position => {
                last.kind = Some(kind);
            }
            Some(_) => control_points.push(ControlPoint::untagged(position)),
        }
    }

    control_points
}

#[cfg(test)]
use crate::math::point;

#[test]
fn positions_to_control_points() {
    let positions = [
        point(0.0, 0.0),
        point(10.0, 10.0),
        point(20.0, 0.0),
        point(20.0, 0.0),
        point(30.0, -10.0),
        point(40.0, 0.0),
    ];

    let control_points = control_points_from_positions(PathType::Bezier, &positions);

    assert_eq!(
        control_points,
        vec![
            ControlPoint::new(point(0.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(10.0, 10.0)),
            ControlPoint::new(point(20.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(30.0, -10.0)),
            ControlPoint::untagged(point(40.0, 0.0)),
        ]
    );
}

#[test]
fn positions_to_control_points_edge_cases() {
    assert!(control_points_from_positions(PathType::Linear, &[]).is_empty());

    let control_points =
        control_points_from_positions(PathType::Catmull, &[point(1.0, 1.0), point(1.0, 1.0)]);
    assert_eq!(
        control_points,
        vec![ControlPoint::new(point(1.0, 1.0), PathType::Catmull)]
    );
}

#[test]
fn default_path_type() {
    assert_eq!(PathType::default(), PathType::Bezier);
    assert_eq!(PathType::bspline(3), PathType::BSpline { degree: 3 });
}
