//! Sample positions and extract sub-paths at arbitrary distances along a path.

use crate::geom::LineSegment;
use crate::math::*;
use crate::path::{PathError, SliderPath};

use core::ops::Range;

/// Whether to measure real or normalized (between 0 and 1) distances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SampleType {
    Distance,
    Normalized,
}

/// The result of sampling a path.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathSample {
    position: Point,
    tangent: Vector,
}

impl PathSample {
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The unit direction of the path at the sample, or a zero vector on paths of
    /// length zero.
    #[inline]
    pub fn tangent(&self) -> Vector {
        self.tangent
    }
}

/// Performs sampling operations on a built path.
///
/// The sampler keeps a cursor on the polyline segment of the previous query, which
/// makes sequential queries cheap while random queries fall back to a binary search.
/// The path itself is only borrowed, several samplers can read the same path at the
/// same time.
///
/// Distances are measured with the path's length table, so on paths built with a
/// longer expected length they are scaled accordingly.
///
/// ## Example
///
/// ```
/// use sliderpath_algorithms::measure::{PathSampler, SampleType};
/// use sliderpath_algorithms::path::{ControlPoint, PathType, SliderPath};
/// use sliderpath_algorithms::math::point;
///
/// let path = SliderPath::new(
///     &[
///         ControlPoint::new(point(0.0, 0.0), PathType::Bezier),
///         ControlPoint::untagged(point(1.0, 1.0)),
///         ControlPoint::untagged(point(2.0, 0.0)),
///     ],
///     None,
///     Default::default(),
/// ).unwrap();
///
/// let mut sampler = PathSampler::new(&path, SampleType::Normalized);
///
/// let sample = sampler.sample(0.5).unwrap();
/// println!("Mid-point position: {:?}, tangent: {:?}", sample.position(), sample.tangent());
///
/// let mut second_half = Vec::new();
/// sampler.split_range(0.5..1.0, &mut second_half).unwrap();
/// assert_eq!(second_half.last(), Some(&point(2.0, 0.0)));
/// ```
pub struct PathSampler<'l> {
    vertices: &'l [Point],
    lengths: &'l [f64],
    cursor: usize,
    sample_type: SampleType,
}

impl<'l> PathSampler<'l> {
    pub fn new(path: &'l SliderPath, sample_type: SampleType) -> Self {
        PathSampler {
            vertices: path.vertices(),
            lengths: path.cumulative_lengths(),
            cursor: 1,
            sample_type,
        }
    }

    /// Sample at a given distance along the path.
    ///
    /// The distance is clamped to the beginning and end of the path.
    pub fn sample(&mut self, dist: f64) -> Result<PathSample, PathError> {
        self.sample_impl(dist, self.sample_type)
    }

    /// Appends the polyline covering a specific sub-range of the path to `output`.
    ///
    /// The range is clamped to the beginning and end of the path. Nothing is appended
    /// if the clamped range is empty.
    pub fn split_range(
        &mut self,
        mut range: Range<f64>,
        output: &mut Vec<Point>,
    ) -> Result<(), PathError> {
        if range.start.is_nan() || range.end.is_nan() {
            return Err(PathError::QueryIsNaN);
        }
        if self.vertices.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let length = self.length();
        if self.sample_type == SampleType::Normalized {
            range.start *= length;
            range.end *= length;
        }
        range.start = range.start.max(0.0);
        range.end = range.end.max(range.start);
        range.start = range.start.min(length);
        range.end = range.end.min(length);

        if range.is_empty() {
            return Ok(());
        }

        let mut push = |p: Point| {
            if output.last() != Some(&p) {
                output.push(p);
            }
        };

        self.move_cursor(range.start);
        push(self.position(range.start));

        let first = self.cursor;
        self.move_cursor(range.end);
        for vertex in &self.vertices[first..self.cursor] {
            push(*vertex);
        }

        push(self.position(range.end));

        Ok(())
    }

    /// Returns the length of the path.
    pub fn length(&self) -> f64 {
        self.lengths.last().cloned().unwrap_or(0.0)
    }

    fn in_bounds(&self, dist: f64) -> bool {
        self.cursor != 0
            && self.lengths[self.cursor - 1] <= dist
            && dist <= self.lengths[self.cursor]
    }

    /// Move the cursor so that the given distance is on the current segment.
    fn move_cursor(&mut self, dist: f64) {
        if dist <= 0.0 {
            self.cursor = 1;
            return;
        }
        if self.in_bounds(dist) {
            return;
        }

        fn floor_log2(num: usize) -> u32 {
            core::mem::size_of::<usize>() as u32 * 8 - num.leading_zeros() - 1
        }

        // Step through the segments when the target is expected to be close, binary
        // search otherwise.
        let start = self.lengths[self.cursor];
        if start < dist {
            let last = self.lengths.len() - 1;
            let (len, num) = (self.length() - start, last - self.cursor);
            debug_assert_ne!(num, 0);
            if (dist - start) / len * (num as f64) < floor_log2(num) as f64 {
                loop {
                    self.cursor += 1;
                    if dist <= self.lengths[self.cursor] {
                        break;
                    }
                }
            } else {
                let first = self.cursor + 1;
                self.cursor = first + self.lengths[first..].partition_point(|&d| d < dist);
            }
        } else {
            let (len, num) = (start, self.cursor + 1);
            if (start - dist) / len * (num as f64) < floor_log2(num) as f64 {
                loop {
                    self.cursor -= 1;
                    if self.cursor == 0 || self.lengths[self.cursor - 1] < dist {
                        break;
                    }
                }
            } else {
                self.cursor = self.lengths[..self.cursor].partition_point(|&d| d < dist);
            }
        }

        debug_assert!(self.in_bounds(dist));
    }

    fn segment(&self) -> LineSegment<f64> {
        LineSegment {
            from: self.vertices[self.cursor - 1],
            to: self.vertices[self.cursor],
        }
    }

    /// Returns the relative position (0 ~ 1) of the given distance on the current segment.
    fn t(&self, dist: f64) -> f64 {
        debug_assert!(self.in_bounds(dist));
        let d0 = self.lengths[self.cursor - 1];
        let d1 = self.lengths[self.cursor];
        if d1 == d0 {
            return 0.0;
        }

        ((dist - d0) / (d1 - d0)).max(0.0).min(1.0)
    }

    fn position(&self, dist: f64) -> Point {
        self.segment().sample(self.t(dist))
    }

    fn sample_impl(
        &mut self,
        mut dist: f64,
        sample_type: SampleType,
    ) -> Result<PathSample, PathError> {
        if dist.is_nan() {
            return Err(PathError::QueryIsNaN);
        }
        if self.vertices.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let length = self.length();
        if length == 0.0 {
            return Ok(PathSample {
                position: self.vertices[0],
                tangent: vector(0.0, 0.0),
            });
        }

        if sample_type == SampleType::Normalized {
            dist *= length;
        }
        dist = dist.max(0.0);
        dist = dist.min(length);

        self.move_cursor(dist);
        let segment = self.segment();

        Ok(PathSample {
            position: segment.sample(self.t(dist)),
            tangent: segment.tangent(),
        })
    }
}

/// Samples the path at `steps + 1` evenly spaced progress values, from the start to
/// the end of the path.
///
/// With zero steps, only the start of the path is sampled.
pub fn sample_uniformly(path: &SliderPath, steps: usize) -> Result<Vec<Point>, PathError> {
    let mut sampler = PathSampler::new(path, SampleType::Normalized);
    if steps == 0 {
        return Ok(vec![sampler.sample(0.0)?.position()]);
    }

    let mut output = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        output.push(sampler.sample(i as f64 / steps as f64)?.position());
    }

    Ok(output)
}
