use crate::geom::Scalar;
use crate::math::Point;
use crate::{ApproximationOptions, ControlPoint, CumulativeLengths, PathBuilder, PathError};

/// An approximated and measured path.
///
/// Built with a [`PathBuilder`], a `SliderPath` owns its description (control points,
/// expected length and approximation options) as well as the polyline approximating
/// it and the arc-length table of that polyline. Both are kept in sync with the
/// description by the setters, which rebuild the path.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderPath {
    pub(crate) control_points: Vec<ControlPoint>,
    pub(crate) expected_length: Option<f64>,
    pub(crate) options: ApproximationOptions,
    pub(crate) vertices: Vec<Point>,
    pub(crate) lengths: CumulativeLengths,
    /// Index of the last vertex of each segment.
    pub(crate) segment_ends: Vec<usize>,
}

impl SliderPath {
    /// Shorthand for building a path with a temporary `PathBuilder`.
    pub fn new(
        control_points: &[ControlPoint],
        expected_length: Option<f64>,
        options: ApproximationOptions,
    ) -> Result<Self, PathError> {
        PathBuilder::new(options).build(control_points, expected_length)
    }

    /// Returns the position at a given progress along the path.
    ///
    /// The progress is clamped between 0 (the first vertex) and 1 (the last vertex).
    pub fn position_at(&self, progress: f64) -> Result<Point, PathError> {
        if progress.is_nan() {
            return Err(PathError::QueryIsNaN);
        }

        self.position_at_distance(self.progress_to_distance(progress))
    }

    /// Returns the position at a given distance from the start of the path.
    ///
    /// The distance is clamped between zero and the length of the path.
    pub fn position_at_distance(&self, distance: f64) -> Result<Point, PathError> {
        if distance.is_nan() {
            return Err(PathError::QueryIsNaN);
        }
        if self.vertices.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let index = self.lengths.index_of_distance(distance);
        Ok(self.interpolate_vertices(index, distance))
    }

    /// Returns the index of the vertex that starts the polyline segment on which the
    /// position at `distance` lies.
    ///
    /// This is the greatest index which cumulative length is not greater than `distance`,
    /// clamped to the valid vertex indices.
    pub fn index_of_distance(&self, distance: f64) -> Result<usize, PathError> {
        if distance.is_nan() {
            return Err(PathError::QueryIsNaN);
        }
        if self.vertices.is_empty() {
            return Err(PathError::EmptyPath);
        }

        Ok(self.lengths.index_of_distance(distance))
    }

    /// Converts a progress into a distance along the path, clamping the progress
    /// between 0 and 1.
    #[inline]
    pub fn progress_to_distance(&self, progress: f64) -> f64 {
        progress.max(0.0).min(1.0) * self.distance()
    }

    /// Interpolates between the vertex at `index` and the next one at a given distance.
    ///
    /// The distance is expected to be between the cumulative lengths of both vertices.
    pub(crate) fn interpolate_vertices(&self, index: usize, distance: f64) -> Point {
        let last = self.vertices.len() - 1;
        if index >= last {
            return self.vertices[last];
        }

        let from = self.vertices[index];
        let to = self.vertices[index + 1];
        let d0 = self.lengths[index];
        let d1 = self.lengths[index + 1];

        if (d1 - d0).is_approx_zero() {
            return from;
        }

        let t = ((distance - d0) / (d1 - d0)).max(0.0).min(1.0);
        from.lerp(to, t)
    }

    /// The length of the path, which is the expected length if one was provided and the
    /// path isn't degenerate.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.lengths.total()
    }

    /// The measured length of the approximated path, before applying the expected length.
    #[inline]
    pub fn calculated_distance(&self) -> f64 {
        self.lengths.calculated_total()
    }

    /// The normalized progress at which each segment ends.
    ///
    /// Segments that end past a truncated path end at 1.
    pub fn segment_ends(&self) -> Vec<f64> {
        let total = self.distance();
        let last = match self.vertices.len() {
            0 => return Vec::new(),
            len => len - 1,
        };

        self.segment_ends
            .iter()
            .map(|&index| {
                if total.is_approx_zero() {
                    return 1.0;
                }
                (self.lengths[index.min(last)] / total).min(1.0)
            })
            .collect()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn cumulative_lengths(&self) -> &[f64] {
        self.lengths.as_slice()
    }

    #[inline]
    pub fn lengths(&self) -> &CumulativeLengths {
        &self.lengths
    }

    #[inline]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    #[inline]
    pub fn expected_length(&self) -> Option<f64> {
        self.expected_length
    }

    #[inline]
    pub fn options(&self) -> &ApproximationOptions {
        &self.options
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Replaces the control points and rebuilds the path.
    ///
    /// The path is left unchanged if the new control points are invalid.
    pub fn set_control_points(
        &mut self,
        control_points: Vec<ControlPoint>,
    ) -> Result<(), PathError> {
        let expected_length = self.expected_length;
        *self = PathBuilder::new(self.options).build_owned(control_points, expected_length)?;
        Ok(())
    }

    /// Replaces the expected length and rebuilds the path.
    pub fn set_expected_length(&mut self, expected_length: Option<f64>) -> Result<(), PathError> {
        *self = PathBuilder::new(self.options).build(&self.control_points, expected_length)?;
        Ok(())
    }

    /// Replaces the approximation options and rebuilds the path.
    pub fn set_options(&mut self, options: ApproximationOptions) -> Result<(), PathError> {
        *self = PathBuilder::new(options).build(&self.control_points, self.expected_length)?;
        Ok(())
    }
}
