#![deny(bare_trait_objects)]

//! Curve approximation and arc-length parameterization of slider paths.
//!
//! # Crates
//!
//! This meta-crate (`sliderpath`) reexports the following sub-crates for convenience:
//!
//! * **sliderpath_geom** - Piecewise-linear approximation of bézier curves, B-splines,
//!   circular arcs and Catmull-Rom splines.
//! * **sliderpath_path** - Control points, path building and arc-length queries.
//! * **sliderpath_algorithms** - Sampling, sub-path extraction and path walking.
//!
//! Each `sliderpath_<name>` crate is reexported as a `<name>` module in `sliderpath`.
//! For example:
//!
//! ```ignore
//! extern crate sliderpath_path;
//! use sliderpath_path::PathBuilder;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate sliderpath;
//! use sliderpath::path::PathBuilder;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Building a path and querying positions
//!
//! A path is described by control points, each of which may start a new segment of a
//! given type. Here a straight line is followed by a circular arc and a bézier curve:
//!
//! ```
//! use sliderpath::math::point;
//! use sliderpath::path::{ApproximationOptions, ControlPoint, PathBuilder, PathType};
//!
//! let control_points = [
//!     ControlPoint::new(point(0.0, 0.0), PathType::Linear),
//!     ControlPoint::new(point(100.0, 0.0), PathType::PerfectCurve),
//!     ControlPoint::untagged(point(150.0, 50.0)),
//!     ControlPoint::new(point(100.0, 100.0), PathType::Bezier),
//!     ControlPoint::untagged(point(50.0, 150.0)),
//!     ControlPoint::untagged(point(0.0, 100.0)),
//! ];
//!
//! let mut builder = PathBuilder::new(ApproximationOptions::DEFAULT);
//! let path = builder.build(&control_points, None).unwrap();
//!
//! assert_eq!(path.position_at(0.0).unwrap(), point(0.0, 0.0));
//! assert_eq!(path.position_at(1.0).unwrap(), point(0.0, 100.0));
//!
//! // Sample the path at regular intervals.
//! let positions = sliderpath::algorithms::measure::sample_uniformly(&path, 10).unwrap();
//! assert_eq!(positions.len(), 11);
//! ```

pub extern crate sliderpath_algorithms;
pub extern crate sliderpath_path;

pub use sliderpath_algorithms as algorithms;
pub use sliderpath_path as path;
pub use sliderpath_path::geom;
pub use sliderpath_path::math;
