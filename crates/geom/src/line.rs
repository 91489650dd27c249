use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A linear segment between two vertices of an approximated path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// The unit direction of the segment, or a zero vector for degenerate segments.
    pub fn tangent(&self) -> Vector<S> {
        let v = self.to_vector();
        let len = v.length();
        if len.is_approx_zero() {
            return Vector::zero();
        }

        v / len
    }

    /// Returns the point at a given distance from the start of the segment,
    /// moving along the segment's direction.
    pub fn point_at_distance(&self, distance: S) -> Point<S> {
        self.from + self.tangent() * distance
    }
}

#[test]
fn tangent_of_degenerate_segment() {
    use crate::{point, vector};

    let l = LineSegment {
        from: point(1.0f64, 1.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(l.tangent(), vector(0.0, 0.0));
    assert_eq!(l.point_at_distance(3.0), point(1.0, 1.0));

    let l = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(0.0, 10.0),
    };
    assert_eq!(l.tangent(), vector(0.0, 1.0));
    assert_eq!(l.point_at_distance(2.5), point(0.0, 2.5));
}
