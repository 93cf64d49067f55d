//! Conversion of surface grids to VTK formats
//!
//! All important types are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! Collect an elevation raster and any number of fields into a
//! [SurfaceGrid], convert, and write:
//!
//! ```rust, no_run
//! # use htools_raster::vtk::{surface_to_vtk, write_vtk, SurfaceGrid, VtkFormat};
//! # use htools_raster::{read_asc, GridGeometry, Raster};
//! // One-time setup of the surface every output file shares
//! let mut dem = read_asc("./watershed.dem.asc", 0).unwrap();
//! dem.flip_vertical();
//! let geometry = GridGeometry::new(565500.0, 4837000.0, 30.0).unwrap();
//!
//! // Per-file data
//! let swe = Raster::new(dem.rows, dem.cols);
//! let mut surface = SurfaceGrid::new(geometry, &dem);
//! surface.push_field("SWE", &swe).unwrap();
//!
//! // Convert with default settings and write a legacy binary file
//! let vtk = surface_to_vtk(&surface);
//! write_vtk(vtk, "./output.vtk", VtkFormat::LegacyBinary).unwrap();
//! ```
//!
//! Under the hood the convenience function initialises a default
//! [SurfaceToVtk]. The converter is public for fine control over the byte
//! order and header title through [SurfaceToVtk::builder].
//!
//! # Output layout
//!
//! The legacy structured grid layout is the one plotting tools agree on for
//! draped surfaces:
//!
//! ```text
//! # vtk DataFile Version x.x
//! <title>
//! BINARY
//! DATASET STRUCTURED_GRID
//! DIMENSIONS <cols> <rows> 1
//! POINTS <cols*rows> double
//! <x y z of every point, row by row>
//! POINT_DATA <cols*rows>
//! SCALARS Elevation double
//! LOOKUP_TABLE default
//! <values>
//! SCALARS <field> double
//! LOOKUP_TABLE default
//! <values>
//! ```
//!
//! Writes are staged through a scratch file and renamed into place, so an
//! interrupted conversion never leaves a half-written file that plotting
//! software would choke on.

// vtk modules
mod builder;
mod convert;
mod surface;

// re-exports for clean API + documentation
#[doc(inline)]
pub use builder::SurfaceToVtkBuilder;

#[doc(inline)]
pub use convert::SurfaceToVtk;

#[doc(inline)]
pub use surface::SurfaceGrid;

// crate modules
use crate::error::Result;

// standard library
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// external crates
use log::warn;
use vtkio::model::Vtk;

/// Supported vtk output variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VtkFormat {
    /// Legacy binary format, the most portable choice
    LegacyBinary,
    /// Legacy plain text format for quick inspection
    LegacyAscii,
    /// Modern XML format
    Xml,
}

/// Convert a [SurfaceGrid] with the default configuration
///
/// Returns a Vtk object ready for writing or further processing, using big
/// endian byte ordering and the default header title.
///
/// ```rust, no_run
/// # use htools_raster::vtk::{surface_to_vtk, SurfaceGrid};
/// # use htools_raster::{GridGeometry, Raster};
/// # let elevation = Raster::new(10, 10);
/// # let geometry = GridGeometry::new(0.0, 0.0, 30.0).unwrap();
/// let surface = SurfaceGrid::new(geometry, &elevation);
/// let vtk = surface_to_vtk(&surface);
/// ```
pub fn surface_to_vtk(surface: &SurfaceGrid) -> Vtk {
    SurfaceToVtk::new().convert(surface)
}

/// Write a Vtk object to `path` in the requested format
///
/// The data is staged through a scratch file beside the target and renamed
/// into place once fully written, so the target path either holds the
/// complete previous content or the complete new content at any moment.
///
/// ```rust, no_run
/// # use htools_raster::vtk::{surface_to_vtk, write_vtk, SurfaceGrid, VtkFormat};
/// # use htools_raster::{GridGeometry, Raster};
/// # let elevation = Raster::new(10, 10);
/// # let geometry = GridGeometry::new(0.0, 0.0, 30.0).unwrap();
/// # let surface = SurfaceGrid::new(geometry, &elevation);
/// let vtk = surface_to_vtk(&surface);
/// write_vtk(vtk, "./output.vtk", VtkFormat::LegacyBinary).unwrap();
/// ```
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<()> {
    let path = path.as_ref();
    let scratch = scratch_path(path);

    match write_formats(vtk, &scratch, format) {
        Ok(()) => {
            std::fs::rename(&scratch, path)?;
            Ok(())
        }
        Err(e) => {
            // nothing useful in the scratch file at this point
            if let Err(remove_error) = std::fs::remove_file(&scratch) {
                warn!("Could not remove {}: {remove_error}", scratch.display());
            }
            Err(e)
        }
    }
}

/// Dispatch to the right vtkio writer for the format
fn write_formats(vtk: Vtk, path: &Path, format: VtkFormat) -> Result<()> {
    match format {
        VtkFormat::LegacyBinary => {
            let mut writer = BufWriter::new(File::create(path)?);
            vtk.write_legacy(&mut writer)?;
            writer.flush()?;
        }
        VtkFormat::LegacyAscii => {
            let mut content = String::new();
            vtk.write_legacy_ascii(&mut content)?;
            std::fs::write(path, content)?;
        }
        VtkFormat::Xml => {
            let mut writer = BufWriter::new(File::create(path)?);
            vtk.write_xml(&mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Sibling path holding the data while it is still being written
fn scratch_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}
