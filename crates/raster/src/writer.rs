//! Write operations for Raster data

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::raster::Raster;

/// Write a [Raster] as a single-layer simulator simple-ascii (`.sa`) file
///
/// The output is the `<nx> <ny> 1` extents line followed by one value per
/// line in x-fastest order, which is exactly the row-major layout of the
/// raster itself.
///
/// The simulator expects row 0 to be the southernmost row, so map-style
/// rasters should be flipped before writing:
///
/// ```no_run
/// # use htools_raster::{read_asc, write_sa};
/// let mut dem = read_asc("./watershed.dem.asc", 6).unwrap();
/// dem.flip_vertical();
///
/// write_sa(&dem, "./watershed.dem.sa").unwrap();
/// ```
pub fn write_sa<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    writeln!(writer, "{} {} 1", raster.cols, raster.rows)?;
    for value in &raster.values {
        writeln!(writer, "{value}")?;
    }

    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
