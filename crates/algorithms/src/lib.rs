#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Sampling, sub-path extraction and walking along slider paths.
//!
//! This crate is reexported in [sliderpath](../sliderpath/index.html).

pub extern crate sliderpath_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod measure;
pub mod walk;

pub use crate::path::geom;
pub use crate::path::math;
