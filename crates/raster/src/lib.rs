//! Gridded surface data for hydrological model files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod geometry;
mod raster;
mod writer;

pub mod reader;
pub mod vtk;

// Inline anything important for a nice public API
#[doc(inline)]
pub use raster::Raster;

#[doc(inline)]
pub use geometry::GridGeometry;

#[doc(inline)]
pub use reader::{read_asc, read_sa};

#[doc(inline)]
pub use writer::write_sa;

#[doc(inline)]
pub use vtk::{surface_to_vtk, write_vtk, SurfaceGrid};

#[doc(inline)]
pub use error::{Error, Result};
