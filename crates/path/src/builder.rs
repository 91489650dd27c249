//! Turning control points into approximated paths.

use crate::geom::{
    approximate_catmull, approximate_circular_arc, approximate_linear, is_finite,
    BezierApproximator,
};
use crate::math::Point;
use crate::{
    ApproximationOptions, CircleFallback, ControlPoint, CumulativeLengths, PathError, PathType,
    Segment, Segments, SliderPath,
};

/// Builds `SliderPath`s out of control points.
///
/// The builder owns the scratch buffers used by the curve approximations, reusing a
/// single builder to build many paths avoids most of the allocations.
///
/// # Example
///
/// ```
/// use sliderpath_path::{ApproximationOptions, ControlPoint, PathBuilder, PathType};
/// use sliderpath_path::math::point;
///
/// let mut builder = PathBuilder::new(ApproximationOptions::DEFAULT);
///
/// let path = builder.build(
///     &[
///         ControlPoint::new(point(0.0, 0.0), PathType::PerfectCurve),
///         ControlPoint::untagged(point(50.0, 50.0)),
///         ControlPoint::untagged(point(100.0, 0.0)),
///     ],
///     None,
/// ).unwrap();
///
/// // Half of a circle of radius 50.
/// assert!((path.distance() - 50.0 * std::f64::consts::PI).abs() < 1.0);
/// ```
pub struct PathBuilder {
    options: ApproximationOptions,
    bezier: BezierApproximator<f64>,
    positions: Vec<Point>,
    sub_path: Vec<Point>,
}

impl PathBuilder {
    pub fn new(options: ApproximationOptions) -> Self {
        PathBuilder {
            options,
            bezier: BezierApproximator::new()
                .with_max_depth(options.max_subdivision_depth)
                .with_max_curves(options.max_bezier_curves),
            positions: Vec::new(),
            sub_path: Vec::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &ApproximationOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ApproximationOptions) {
        self.options = options;
        self.bezier.set_max_depth(options.max_subdivision_depth);
        self.bezier.set_max_curves(options.max_bezier_curves);
    }

    /// Approximates the path described by `control_points` and measures it.
    ///
    /// If `expected_length` is provided, the path is shortened or its length table
    /// scaled so that its total length is exactly the expected length.
    ///
    /// An empty control point list produces an empty path.
    ///
    /// Fails if a tolerance of the builder's options is not a finite positive value,
    /// or if the approximated path is too long for its length to be represented.
    pub fn build(
        &mut self,
        control_points: &[ControlPoint],
        expected_length: Option<f64>,
    ) -> Result<SliderPath, PathError> {
        self.build_owned(control_points.to_vec(), expected_length)
    }

    pub(crate) fn build_owned(
        &mut self,
        control_points: Vec<ControlPoint>,
        expected_length: Option<f64>,
    ) -> Result<SliderPath, PathError> {
        for (index, cp) in control_points.iter().enumerate() {
            if !is_finite(cp.position) {
                return Err(PathError::PositionIsNaN { index });
            }
        }

        if let Some(length) = expected_length {
            if !length.is_finite() || length < 0.0 {
                return Err(PathError::InvalidExpectedLength(length));
            }
        }

        for &tolerance in &[self.options.bezier_tolerance, self.options.circle_tolerance] {
            if !(tolerance > 0.0) || !tolerance.is_finite() {
                return Err(PathError::InvalidTolerance(tolerance));
            }
        }

        let mut vertices: Vec<Point> = Vec::new();
        let mut segment_ends = Vec::new();

        for segment in Segments::new(&control_points) {
            self.approximate_segment(&segment);

            let skip_first = match (vertices.last(), self.sub_path.first()) {
                (Some(last), Some(first)) => last == first,
                _ => false,
            };
            let start = if skip_first { 1 } else { 0 };
            vertices.extend_from_slice(&self.sub_path[start..]);

            segment_ends.push(vertices.len().saturating_sub(1));
        }

        let mut lengths = CumulativeLengths::new();
        lengths.compute(&vertices);

        if !lengths.calculated_total().is_finite() {
            return Err(PathError::LengthOverflow);
        }

        if let Some(expected) = expected_length {
            if expected != lengths.calculated_total() {
                log::debug!(
                    "Adjusting a path of length {} to the expected length {}",
                    lengths.calculated_total(),
                    expected
                );
                lengths.apply_expected_length(&mut vertices, expected);
            }
        }

        Ok(SliderPath {
            control_points,
            expected_length,
            options: self.options,
            vertices,
            lengths,
            segment_ends,
        })
    }

    /// Approximates a single segment into `self.sub_path`.
    fn approximate_segment(&mut self, segment: &Segment) {
        self.positions.clear();
        self.positions.extend(segment.positions());
        self.sub_path.clear();

        log::trace!(
            "Approximating a {:?} segment with {} control points",
            segment.kind,
            self.positions.len()
        );

        let options = &self.options;
        match segment.kind {
            PathType::Linear => {
                approximate_linear(&self.positions, &mut self.sub_path);
            }
            PathType::PerfectCurve => {
                let is_arc = self.positions.len() == 3
                    && approximate_circular_arc(
                        self.positions[0],
                        self.positions[1],
                        self.positions[2],
                        options.circle_tolerance,
                        &mut self.sub_path,
                    );

                if !is_arc {
                    log::debug!(
                        "Perfect curve with {} control points can't be approximated with an arc, falling back to {:?}",
                        self.positions.len(),
                        options.circle_fallback
                    );

                    match options.circle_fallback {
                        CircleFallback::Bezier => self.bezier.approximate(
                            &self.positions,
                            0,
                            options.bezier_tolerance,
                            &mut self.sub_path,
                        ),
                        CircleFallback::Linear => {
                            approximate_linear(&self.positions, &mut self.sub_path)
                        }
                    }
                }
            }
            PathType::Bezier => {
                self.bezier.approximate(
                    &self.positions,
                    0,
                    options.bezier_tolerance,
                    &mut self.sub_path,
                );
            }
            PathType::BSpline { degree } => {
                self.bezier.approximate(
                    &self.positions,
                    degree as usize,
                    options.bezier_tolerance,
                    &mut self.sub_path,
                );
            }
            PathType::Catmull => {
                approximate_catmull(&self.positions, options.catmull_detail, &mut self.sub_path);
            }
        }
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        PathBuilder::new(ApproximationOptions::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    fn build(control_points: &[ControlPoint]) -> SliderPath {
        PathBuilder::default().build(control_points, None).unwrap()
    }

    #[test]
    fn linear_segments_are_unchanged() {
        let control_points = [
            ControlPoint::new(point(0.0, 0.0), PathType::Linear),
            ControlPoint::untagged(point(10.0, 0.0)),
            ControlPoint::untagged(point(10.0, 10.0)),
            ControlPoint::untagged(point(-5.0, 3.0)),
        ];

        let path = build(&control_points);
        let positions: Vec<Point> = control_points.iter().map(|cp| cp.position).collect();
        assert_eq!(path.vertices(), &positions[..]);
    }

    #[test]
    fn quadratic_bezier() {
        let path = build(&[
            ControlPoint::new(point(0.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(50.0, 0.0)),
            ControlPoint::untagged(point(50.0, 50.0)),
        ]);

        assert!(path.vertices().len() > 2);
        assert_eq!(path.vertices()[0], point(0.0, 0.0));
        assert_eq!(*path.vertices().last().unwrap(), point(50.0, 50.0));
    }

    #[test]
    fn cubic_bezier_stays_close_to_the_curve() {
        let (p0, p1, p2, p3) = (
            point(0.0, 0.0),
            point(30.0, 80.0),
            point(90.0, -40.0),
            point(120.0, 20.0),
        );
        let path = build(&[
            ControlPoint::untagged(p0),
            ControlPoint::untagged(p1),
            ControlPoint::untagged(p2),
            ControlPoint::untagged(p3),
        ]);

        let curve: Vec<Point> = (0..=10_000)
            .map(|i| {
                let t = i as f64 / 10_000.0;
                let mt = 1.0 - t;
                (p0.to_vector() * (mt * mt * mt)
                    + p1.to_vector() * (3.0 * mt * mt * t)
                    + p2.to_vector() * (3.0 * mt * t * t)
                    + p3.to_vector() * (t * t * t))
                    .to_point()
            })
            .collect();

        for vertex in path.vertices() {
            let distance = curve
                .iter()
                .map(|p| (*p - *vertex).length())
                .fold(f64::MAX, f64::min);
            assert!(distance < 0.5);
        }
    }

    #[test]
    fn shared_endpoints_are_not_duplicated() {
        let path = build(&[
            ControlPoint::new(point(0.0, 0.0), PathType::Linear),
            ControlPoint::untagged(point(10.0, 0.0)),
            ControlPoint::new(point(20.0, 0.0), PathType::PerfectCurve),
            ControlPoint::untagged(point(30.0, 10.0)),
            ControlPoint::new(point(40.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(50.0, 20.0)),
            ControlPoint::untagged(point(60.0, 0.0)),
            ControlPoint::new(point(70.0, 0.0), PathType::Catmull),
            ControlPoint::untagged(point(80.0, 5.0)),
        ]);

        for pair in path.vertices().windows(2) {
            assert_ne!(pair[0], pair[1]);
        }

        assert_eq!(path.vertices()[0], point(0.0, 0.0));
        assert_eq!(*path.vertices().last().unwrap(), point(80.0, 5.0));
        for shared in &[point(20.0, 0.0), point(40.0, 0.0), point(70.0, 0.0)] {
            assert_eq!(path.vertices().iter().filter(|p| *p == shared).count(), 1);
        }
        assert_eq!(path.segment_ends().len(), 4);
    }

    #[test]
    fn perfect_curve() {
        let a = point(0.0, 0.0);
        let c = point(0.0, 1.0);
        let path = build(&[
            ControlPoint::new(a, PathType::PerfectCurve),
            ControlPoint::untagged(point(1.0, 0.0)),
            ControlPoint::untagged(c),
        ]);

        let center = point(0.5, 0.5);
        let radius = 0.5f64.sqrt();
        assert!(path.vertices().len() > 2);
        assert_eq!(path.vertices()[0], a);
        assert_eq!(*path.vertices().last().unwrap(), c);
        for p in path.vertices() {
            assert!(((*p - center).length() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn perfect_curve_fallbacks() {
        // Collinear points.
        let collinear = [
            ControlPoint::new(point(0.0, 0.0), PathType::PerfectCurve),
            ControlPoint::untagged(point(5.0, 0.0)),
            ControlPoint::untagged(point(10.0, 0.0)),
        ];

        let path = build(&collinear);
        assert_eq!(path.vertices()[0], point(0.0, 0.0));
        assert_eq!(*path.vertices().last().unwrap(), point(10.0, 0.0));
        assert_eq!(path.distance(), 10.0);

        let mut builder = PathBuilder::new(
            ApproximationOptions::DEFAULT.with_circle_fallback(CircleFallback::Linear),
        );
        let path = builder.build(&collinear, None).unwrap();
        assert_eq!(
            path.vertices(),
            &[point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)]
        );

        // Four points can't describe an arc.
        let path = builder
            .build(
                &[
                    ControlPoint::new(point(0.0, 0.0), PathType::PerfectCurve),
                    ControlPoint::untagged(point(0.0, 10.0)),
                    ControlPoint::untagged(point(10.0, 10.0)),
                    ControlPoint::untagged(point(10.0, 0.0)),
                ],
                None,
            )
            .unwrap();
        assert_eq!(path.vertices().len(), 4);
        assert_eq!(path.distance(), 30.0);
    }

    #[test]
    fn bspline_segment() {
        let path = build(&[
            ControlPoint::new(point(0.0, 0.0), PathType::bspline(1)),
            ControlPoint::untagged(point(10.0, 0.0)),
            ControlPoint::untagged(point(10.0, 10.0)),
            ControlPoint::untagged(point(20.0, 10.0)),
        ]);

        // A B-spline of degree one is its control polygon.
        assert_eq!(
            path.vertices(),
            &[
                point(0.0, 0.0),
                point(10.0, 0.0),
                point(10.0, 10.0),
                point(20.0, 10.0)
            ]
        );
    }

    #[test]
    fn catmull_segment() {
        let options = ApproximationOptions::DEFAULT.with_catmull_detail(10);
        let path = PathBuilder::new(options)
            .build(
                &[
                    ControlPoint::new(point(0.0, 0.0), PathType::Catmull),
                    ControlPoint::untagged(point(10.0, 10.0)),
                    ControlPoint::untagged(point(20.0, 0.0)),
                ],
                None,
            )
            .unwrap();

        assert_eq!(path.vertices().len(), 21);
        assert_eq!(path.vertices()[10], point(10.0, 10.0));
    }

    #[test]
    fn single_point() {
        let path = build(&[ControlPoint::new(point(3.0, 4.0), PathType::Bezier)]);
        assert_eq!(path.vertices(), &[point(3.0, 4.0)]);
        assert_eq!(path.cumulative_lengths(), &[0.0]);
        assert_eq!(path.distance(), 0.0);
        assert_eq!(path.position_at(0.5), Ok(point(3.0, 4.0)));
    }

    #[test]
    fn empty() {
        let path = build(&[]);
        assert!(path.is_empty());
        assert!(path.vertices().is_empty());
        assert!(path.cumulative_lengths().is_empty());
        assert_eq!(path.position_at(0.5), Err(PathError::EmptyPath));
    }

    #[test]
    fn invalid_inputs() {
        let mut builder = PathBuilder::default();

        let result = builder.build(
            &[
                ControlPoint::new(point(0.0, 0.0), PathType::Linear),
                ControlPoint::untagged(point(f64::NAN, 1.0)),
            ],
            None,
        );
        assert_eq!(result.err(), Some(PathError::PositionIsNaN { index: 1 }));

        let control_points = [
            ControlPoint::new(point(0.0, 0.0), PathType::Linear),
            ControlPoint::untagged(point(1.0, 1.0)),
        ];
        for &length in &[-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                builder.build(&control_points, Some(length)),
                Err(PathError::InvalidExpectedLength(_))
            ));
        }
    }

    #[test]
    fn reuse_builder() {
        let control_points = [
            ControlPoint::new(point(0.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(100.0, 0.0)),
            ControlPoint::untagged(point(100.0, 100.0)),
            ControlPoint::untagged(point(0.0, 100.0)),
        ];

        let mut builder = PathBuilder::default();
        let first = builder.build(&control_points, None).unwrap();
        let second = builder.build(&control_points, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_tolerances() {
        let control_points = [
            ControlPoint::new(point(0.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(50.0, 0.0)),
            ControlPoint::untagged(point(50.0, 50.0)),
        ];

        for &tolerance in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut builder =
                PathBuilder::new(ApproximationOptions::DEFAULT.with_bezier_tolerance(tolerance));
            assert!(matches!(
                builder.build(&control_points, None),
                Err(PathError::InvalidTolerance(_))
            ));

            builder.set_options(ApproximationOptions::DEFAULT.with_circle_tolerance(tolerance));
            assert!(matches!(
                builder.build(&control_points, None),
                Err(PathError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn huge_bezier_is_bounded() {
        let control_points = [
            ControlPoint::new(point(0.0, 0.0), PathType::Bezier),
            ControlPoint::untagged(point(1e20, 0.0)),
            ControlPoint::untagged(point(1e20, 1e20)),
        ];

        let path = build(&control_points);
        let max_vertices = 2 * ApproximationOptions::DEFAULT_MAX_BEZIER_CURVES + 1;
        assert!(path.vertices().len() <= max_vertices);
        assert_eq!(path.vertices()[0], point(0.0, 0.0));
        assert_eq!(*path.vertices().last().unwrap(), point(1e20, 1e20));
        assert!(path.distance().is_finite());

        let options = ApproximationOptions::DEFAULT.with_max_bezier_curves(8);
        let path = PathBuilder::new(options).build(&control_points, None).unwrap();
        assert!(path.vertices().len() <= 17);
    }

    #[test]
    fn overflowing_length() {
        let mut builder = PathBuilder::default();
        let result = builder.build(
            &[
                ControlPoint::new(point(0.0, 0.0), PathType::Linear),
                ControlPoint::untagged(point(1e200, 1e200)),
            ],
            None,
        );
        assert_eq!(result.err(), Some(PathError::LengthOverflow));
    }
}
