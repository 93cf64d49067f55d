//! Readers for ascii raster formats
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! Two text formats cover every gridded input this toolkit deals with:
//!
//! - **`.asc`** map rasters: one line per row with whitespace separated
//!   values, optionally preceded by a fixed number of header lines. DEM,
//!   land cover, and soil texture exports all arrive in this shape.
//! - **`.sa`** simple-ascii files: the simulator's own text format, an
//!   `<nx> <ny> <nz>` extents line followed by one value per line with x
//!   cycling fastest, then y, then z.
//!
//! ```rust, no_run
//! # use htools_raster::{read_asc, read_sa};
//! // Read a DEM exported with a 6 line header
//! let mut dem = read_asc("watershed.dem.asc", 6).unwrap();
//!
//! // Map rasters list the northern row first, so flip before use
//! dem.flip_vertical();
//!
//! // Read a single layer simple-ascii file
//! let soil = read_sa("watershed.soil.sa").unwrap();
//! ```
//!
//! The readers do not reorder rows. Flipping into the simulator's
//! south-to-north convention is a single explicit call on the [Raster] so
//! that round trips through [write_sa](crate::write_sa) stay predictable.

// reader modules
pub(crate) mod parsers;

// crate modules
use crate::error::{Error, Result};
use crate::raster::Raster;

// htools modules
use htools_utils::f;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::debug;

/// Read a whitespace-delimited ascii raster, skipping `skip` header lines
///
/// Returns a Result containing a [Raster] with one row per data line. Every
/// row must have the same number of values as the first.
///
/// - `path` - Path to the raster file, can be [&str], [String], [Path], etc...
/// - `skip` - Number of header lines before the data block
///
/// ```rust
/// # use htools_raster::read_asc;
/// // The example file carries the usual 3 line header
/// let dem = read_asc("./data/dem_4x4.asc", 3).unwrap();
///
/// assert_eq!(dem.rows, 4);
/// assert_eq!(dem.cols, 4);
/// ```
pub fn read_asc<P: AsRef<Path>>(path: P, skip: usize) -> Result<Raster> {
    let path = path.as_ref();
    let reader = init_reader(path)?;

    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0_usize;
    let mut cols = 0_usize;

    for line in reader.lines().map_while(std::result::Result::ok).skip(skip) {
        let line = line.trim_start();
        if line.is_empty() {
            continue;
        }

        let (rest, row) = parsers::vector_of_f64(line)
            .map_err(|_| Error::ParseError(f!("could not read raster row from \"{line}\"")))?;

        // anything left over means the line was not purely numeric
        if !rest.trim().is_empty() {
            return Err(Error::ParseError(f!(
                "unexpected text \"{}\" in raster row",
                rest.trim()
            )));
        }

        if rows == 0 {
            cols = row.len();
        } else if row.len() != cols {
            return Err(Error::UnevenRowLength {
                row: rows,
                expected: cols,
                found: row.len(),
            });
        }

        values.extend_from_slice(&row);
        rows += 1;
    }

    debug!("Read {rows}x{cols} raster from {}", path.display());
    Raster::from_values(rows, cols, values)
}

/// Read a single-layer simulator simple-ascii (`.sa`) file
///
/// Returns a Result containing a [Raster] built from the value-per-line body
/// in x-fastest order, which lands directly in the row-major layout.
///
/// Only `nz = 1` files describe a surface; anything else is rejected with
/// [Error::InvalidExtents]. The value count must match the extents line.
///
/// ```rust, no_run
/// # use htools_raster::read_sa;
/// let soil = read_sa("./watershed.soil.sa").unwrap();
/// println!("{soil}");
/// ```
pub fn read_sa<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let reader = init_reader(path)?;
    let mut lines = reader.lines().map_while(std::result::Result::ok);

    let extents = lines.next().ok_or(Error::EmptyRaster)?;
    let (_, (nx, ny, nz)) = parsers::sa_extents(&extents)
        .map_err(|_| Error::ParseError(f!("could not read sa extents from \"{extents}\"")))?;

    if nx <= 0 || ny <= 0 || nz != 1 {
        return Err(Error::InvalidExtents { nx, ny, nz });
    }

    let cols = nx as usize;
    let rows = ny as usize;
    let mut values: Vec<f64> = Vec::with_capacity(rows * cols);

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (_, row) = parsers::vector_of_f64(line)
            .map_err(|_| Error::ParseError(f!("could not read sa value from \"{line}\"")))?;
        values.extend_from_slice(&row);
    }

    if values.len() != rows * cols {
        return Err(Error::UnexpectedValueCount {
            expected: rows * cols,
            found: values.len(),
        });
    }

    Raster::from_values(rows, cols, values)
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
