#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D curve approximation on top of euclid.
//!
//! This crate is reexported in [sliderpath](../sliderpath/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths to turn the following curve descriptions
//! into polylines:
//!
//! - straight polylines (the identity approximation),
//! - bézier curves of arbitrary order and clamped uniform B-splines,
//! - circular arcs passing through three points,
//! - Catmull-Rom splines.
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line segments.
//!
//! The tolerance threshold taken as input by the bézier approximation bounds the
//! discrete second derivative of the control polygon, while the circular arc
//! approximation bounds the distance between the arc and its chords. The smaller
//! the tolerance is, the more precise the approximation and the more segments
//! are generated. The two thresholds measure different things and are never
//! interchangeable.
//!
//! ```
//! use sliderpath_geom::{point, approximate_bezier};
//!
//! let polyline = approximate_bezier(
//!     &[point(0.0, 0.0), point(50.0, 0.0), point(50.0, 50.0)],
//!     0.25,
//! );
//!
//! assert!(polyline.len() > 2);
//! assert_eq!(polyline[0], point(0.0, 0.0));
//! assert_eq!(*polyline.last().unwrap(), point(50.0, 50.0));
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod bezier;
pub mod bspline;
pub mod catmull;
pub mod circular_arc;
mod line;
pub mod linear;

#[doc(inline)]
pub use crate::bezier::{approximate_bezier, BezierApproximator};
#[doc(inline)]
pub use crate::bspline::decompose_bspline;
#[doc(inline)]
pub use crate::catmull::approximate_catmull;
#[doc(inline)]
pub use crate::circular_arc::{approximate_circular_arc, CircularArc};
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::linear::approximate_linear;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::cast::cast;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const QUARTER: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const FIVE: Self;

        /// Absolute threshold under which squared lengths and weight sums
        /// are considered to be zero.
        const EPSILON: Self;

        /// Whether the value is within `EPSILON` of zero.
        #[inline]
        fn is_approx_zero(self) -> bool {
            self.abs() <= Self::EPSILON
        }

        /// Converts an index or a count into a scalar.
        #[inline]
        fn from_usize(v: usize) -> Self {
            cast(v).unwrap_or_else(Self::nan)
        }
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const QUARTER: Self = 0.25;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const FIVE: Self = 5.0;

        const EPSILON: Self = 1e-4;
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const QUARTER: Self = 0.25;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const FIVE: Self = 5.0;

        const EPSILON: Self = 1e-8;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Returns true if all coordinates of the point are finite.
#[inline]
pub fn is_finite<S: Scalar>(p: Point<S>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
