use crate::geom::{LineSegment, Scalar};
use crate::math::Point;

/// The arc-length table of an approximated path.
///
/// Holds one non-decreasing entry per vertex, the first entry being zero and the last
/// one the total length of the path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CumulativeLengths {
    lengths: Vec<f64>,
    calculated: f64,
}

impl CumulativeLengths {
    pub fn new() -> Self {
        CumulativeLengths {
            lengths: Vec::new(),
            calculated: 0.0,
        }
    }

    /// Measures a polyline, replacing the current content of the table.
    pub fn compute(&mut self, vertices: &[Point]) {
        self.lengths.clear();
        self.lengths.reserve(vertices.len());

        let mut length = 0.0;
        if !vertices.is_empty() {
            self.lengths.push(length);
        }

        for pair in vertices.windows(2) {
            length += (pair[1] - pair[0]).length();
            self.lengths.push(length);
        }

        self.calculated = length;
    }

    /// Adjusts the table (and the polyline it was computed from) so that the total
    /// length is `expected`.
    ///
    /// A shorter expected length removes the trailing vertices past that length and
    /// moves the new last vertex along its segment so that the path ends exactly at the
    /// expected length. An expected length of zero collapses the path to its first
    /// vertex.
    ///
    /// A longer expected length scales every entry of the table proportionally, the
    /// vertices are left untouched. Paths of zero length are not scaled.
    pub fn apply_expected_length(&mut self, vertices: &mut Vec<Point>, expected: f64) {
        debug_assert_eq!(vertices.len(), self.lengths.len());

        let total = self.calculated;
        if self.lengths.is_empty() || expected == total {
            return;
        }

        if expected > total {
            if total.is_approx_zero() {
                return;
            }

            let scale = expected / total;
            for length in &mut self.lengths {
                *length *= scale;
            }
            if let Some(last) = self.lengths.last_mut() {
                *last = expected;
            }

            return;
        }

        // The last entry is past the expected length.
        self.lengths.pop();
        let mut end = vertices.len() - 1;
        while let Some(&length) = self.lengths.last() {
            if length < expected {
                break;
            }
            self.lengths.pop();
            vertices.pop();
            end -= 1;
        }

        if end == 0 {
            vertices.truncate(1);
            self.lengths.clear();
            self.lengths.push(0.0);
            return;
        }

        let kept = self.lengths[end - 1];
        let segment = LineSegment {
            from: vertices[end - 1],
            to: vertices[end],
        };
        vertices[end] = segment.point_at_distance(expected - kept);
        self.lengths.push(expected);
    }

    /// The total length of the path after applying the expected length.
    #[inline]
    pub fn total(&self) -> f64 {
        self.lengths.last().cloned().unwrap_or(0.0)
    }

    /// The measured length of the polyline, regardless of the expected length.
    #[inline]
    pub fn calculated_total(&self) -> f64 {
        self.calculated
    }

    /// Returns the greatest index which entry is not greater than `distance`.
    ///
    /// Distances below zero map to the first index and distances past the end of
    /// the path to the last one. Returns zero if the table is empty.
    pub fn index_of_distance(&self, distance: f64) -> usize {
        self.lengths
            .partition_point(|&length| length <= distance)
            .saturating_sub(1)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.lengths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl std::ops::Index<usize> for CumulativeLengths {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.lengths[index]
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn square() -> Vec<Point> {
    vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]
}

#[test]
fn measure() {
    let mut lengths = CumulativeLengths::new();
    lengths.compute(&square());

    assert_eq!(lengths.as_slice(), &[0.0, 10.0, 20.0, 30.0]);
    assert_eq!(lengths.total(), 30.0);
    assert_eq!(lengths.calculated_total(), 30.0);

    lengths.compute(&[]);
    assert!(lengths.is_empty());
    assert_eq!(lengths.total(), 0.0);

    lengths.compute(&[point(1.0, 1.0)]);
    assert_eq!(lengths.as_slice(), &[0.0]);
}

#[test]
fn index_of_distance() {
    let mut lengths = CumulativeLengths::new();
    lengths.compute(&[
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 0.0),
        point(20.0, 0.0),
    ]);
    assert_eq!(lengths.as_slice(), &[0.0, 10.0, 10.0, 20.0]);

    assert_eq!(lengths.index_of_distance(-5.0), 0);
    assert_eq!(lengths.index_of_distance(0.0), 0);
    assert_eq!(lengths.index_of_distance(9.9), 0);
    // Greatest index among equal entries.
    assert_eq!(lengths.index_of_distance(10.0), 2);
    assert_eq!(lengths.index_of_distance(15.0), 2);
    assert_eq!(lengths.index_of_distance(20.0), 3);
    assert_eq!(lengths.index_of_distance(100.0), 3);
}

#[test]
fn truncate() {
    let mut vertices = square();
    let mut lengths = CumulativeLengths::new();
    lengths.compute(&vertices);

    lengths.apply_expected_length(&mut vertices, 15.0);
    assert_eq!(vertices, vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 5.0)]);
    assert_eq!(lengths.as_slice(), &[0.0, 10.0, 15.0]);
    assert_eq!(lengths.calculated_total(), 30.0);

    // Truncating exactly at a vertex.
    let mut vertices = square();
    lengths.compute(&vertices);
    lengths.apply_expected_length(&mut vertices, 20.0);
    assert_eq!(vertices, vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]);
    assert_eq!(lengths.as_slice(), &[0.0, 10.0, 20.0]);
}

#[test]
fn truncate_to_zero() {
    let mut vertices = square();
    let mut lengths = CumulativeLengths::new();
    lengths.compute(&vertices);

    lengths.apply_expected_length(&mut vertices, 0.0);
    assert_eq!(vertices, vec![point(0.0, 0.0)]);
    assert_eq!(lengths.as_slice(), &[0.0]);
    assert_eq!(lengths.total(), 0.0);
}

#[test]
fn rescale() {
    let mut vertices = square();
    let mut lengths = CumulativeLengths::new();
    lengths.compute(&vertices);

    lengths.apply_expected_length(&mut vertices, 60.0);
    assert_eq!(vertices, square());
    assert_eq!(lengths.as_slice(), &[0.0, 20.0, 40.0, 60.0]);
    assert_eq!(lengths.calculated_total(), 30.0);

    // Zero length paths are left alone.
    let mut vertices = vec![point(1.0, 1.0), point(1.0, 1.0)];
    lengths.compute(&vertices);
    lengths.apply_expected_length(&mut vertices, 10.0);
    assert_eq!(lengths.as_slice(), &[0.0, 0.0]);
    assert_eq!(vertices.len(), 2);
}
