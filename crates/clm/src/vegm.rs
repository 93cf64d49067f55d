//! Write operations for CLM vegm surface files

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::landcover::{Classification, VEGETATION_CLASSES};

// htools modules
use htools_raster::Raster;

// external crates
use itertools::Itertools;

/// Fixed column headers expected by CLM, kept byte for byte
const HEADER_NAMES: &str = "x  y   lat     lon    sand clay color  fractional coverage of grid by vegetation class (Must/Should Add to 1.0)";
const HEADER_UNITS: &str = "        (Deg)   (Deg)    (%/100)  index  1    2    3    4    5    6    7    8    9   10  11  12   13   14   15   16   17   18";

/// Site constants written for every cell of a vegm file
///
/// CLM wants per-cell soil and location values, but at watershed scale a
/// single set for the whole domain is the norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteParams {
    /// Latitude in degrees north
    pub latitude: f64,
    /// Longitude in degrees east
    pub longitude: f64,
    /// Sand fraction of the soil, 0.0 to 1.0
    pub sand: f64,
    /// Clay fraction of the soil, 0.0 to 1.0
    pub clay: f64,
    /// Soil colour index
    pub color: i32,
}

/// Write a land cover raster to a CLM vegm surface file
///
/// Every cell becomes one line with its 1-based x/y indices, the site
/// parameters, and a full vegetation class assignment: 1.00 in the column of
/// the cell's class and 0.00 everywhere else. Cells run x fastest from the
/// first raster row.
///
/// The whole raster is remapped through the [Classification] before anything
/// is written, so a raster holding codes from the wrong scheme fails without
/// leaving a file behind.
///
/// ```no_run
/// # use htools_clm::{write_vegm, Classification, SiteParams};
/// # use htools_raster::read_asc;
/// let land = read_asc("./landcover.asc", 6).unwrap();
/// let site = SiteParams {
///     latitude: 43.72,
///     longitude: -116.11,
///     sand: 0.16,
///     clay: 0.26,
///     color: 2,
/// };
///
/// write_vegm(&land, &site, Classification::Nlcd, "./drv_vegm.dat").unwrap();
/// ```
pub fn write_vegm<P: AsRef<Path>>(
    land: &Raster,
    site: &SiteParams,
    classification: Classification,
    path: P,
) -> Result<()> {
    let columns = remap(land, classification)?;
    let mut writer = init_writer(path)?;

    writeln!(writer, "{HEADER_NAMES}")?;
    writeln!(writer, "{HEADER_UNITS}")?;

    for (index, column) in columns.iter().enumerate() {
        let x = index % land.cols + 1;
        let y = index / land.cols + 1;

        let fractions = (0..VEGETATION_CLASSES)
            .map(|class| if class == *column { "1.00" } else { "0.00" })
            .join(" ");

        writeln!(
            writer,
            "{x}   {y}   {lat:5.2}  {lon:5.2} {sand:4.2} {clay:4.2}   {color}   {fractions}",
            lat = site.latitude,
            lon = site.longitude,
            sand = site.sand,
            clay = site.clay,
            color = site.color,
        )?;
    }

    Ok(())
}

/// Vegetation class column of every cell, x fastest
fn remap(land: &Raster, classification: Classification) -> Result<Vec<usize>> {
    land.values
        .iter()
        .map(|value| {
            let code = value.round() as i32;
            classification
                .column(code)
                .ok_or(Error::UnmappedLandCover { code })
        })
        .collect()
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
