#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Control points, path building and arc-length queries.
//!
//! A slider path is described by a list of [`ControlPoint`]s, each of which may be
//! tagged with the [`PathType`] of the segment it starts. The [`PathBuilder`] splits
//! the list into segments, approximates each of them with the curve approximators
//! of [sliderpath_geom](../sliderpath_geom/index.html), concatenates the resulting
//! polylines and measures them. The resulting [`SliderPath`] maps progress values and
//! distances to positions.
//!
//! This crate is reexported in [sliderpath](../sliderpath/index.html).
//!
//! # Examples
//!
//! ```
//! use sliderpath_path::{ApproximationOptions, ControlPoint, PathBuilder, PathType};
//! use sliderpath_path::math::point;
//!
//! let control_points = [
//!     ControlPoint::new(point(0.0, 0.0), PathType::Linear),
//!     ControlPoint::untagged(point(100.0, 0.0)),
//!     ControlPoint::new(point(100.0, 100.0), PathType::Bezier),
//!     ControlPoint::untagged(point(150.0, 150.0)),
//!     ControlPoint::untagged(point(200.0, 100.0)),
//! ];
//!
//! let mut builder = PathBuilder::new(ApproximationOptions::DEFAULT);
//!
//! // Ask for a path that is exactly 150 units long.
//! let path = builder.build(&control_points, Some(150.0)).unwrap();
//!
//! assert_eq!(path.distance(), 150.0);
//! assert_eq!(path.position_at(0.0).unwrap(), point(0.0, 0.0));
//! assert_eq!(path.position_at(0.5).unwrap(), point(75.0, 0.0));
//! assert_eq!(path.position_at(1.0).unwrap(), point(100.0, 50.0));
//! ```

pub use sliderpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod builder;
mod control_point;
mod error;
mod lengths;
mod options;
mod segments;
mod slider_path;

#[doc(inline)]
pub use crate::builder::PathBuilder;
#[doc(inline)]
pub use crate::control_point::{control_points_from_positions, ControlPoint, PathType};
#[doc(inline)]
pub use crate::error::PathError;
#[doc(inline)]
pub use crate::lengths::CumulativeLengths;
#[doc(inline)]
pub use crate::options::{ApproximationOptions, CircleFallback};
#[doc(inline)]
pub use crate::segments::{Segment, Segments};
#[doc(inline)]
pub use crate::slider_path::SliderPath;

pub mod math {
    //! f64 version of the sliderpath_geom types used everywhere. The other sliderpath
    //! crates reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}
