// crate modules
use crate::error::{Error, Result};
use crate::geometry::GridGeometry;
use crate::raster::Raster;

/// A surface ready for conversion: geometry, elevation, and named fields
///
/// Collects everything one output file needs. The elevation raster supplies
/// the z coordinate of every grid point and is always written as the first
/// scalar dataset, named `Elevation`. Any number of further fields can be
/// attached and are written in the order they were pushed.
///
/// Fields only borrow their rasters, so one elevation model can back the
/// surface for every timestep of a model run without being reloaded.
///
/// ```rust
/// # use htools_raster::{GridGeometry, Raster, SurfaceGrid};
/// let geometry = GridGeometry::new(565500.0, 4837000.0, 30.0).unwrap();
/// let elevation = Raster::from_values(2, 2, vec![986.0, 994.5, 1001.0, 1015.2]).unwrap();
/// let swe = Raster::from_values(2, 2, vec![0.0, 0.01, 0.02, 0.4]).unwrap();
///
/// let mut surface = SurfaceGrid::new(geometry, &elevation);
/// surface.push_field("SWE", &swe).unwrap();
///
/// assert_eq!(surface.points(), 4);
/// assert_eq!(surface.fields().len(), 1);
/// ```
///
/// Every field must cover exactly the elevation grid. Mismatched shapes are
/// rejected up front, long before anything touches the filesystem:
///
/// ```rust
/// # use htools_raster::{GridGeometry, Raster, SurfaceGrid};
/// # let geometry = GridGeometry::new(0.0, 0.0, 30.0).unwrap();
/// # let elevation = Raster::new(2, 2);
/// let wrong_shape = Raster::new(3, 2);
///
/// let mut surface = SurfaceGrid::new(geometry, &elevation);
/// assert!(surface.push_field("SWE", &wrong_shape).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceGrid<'a> {
    /// Placement of the grid in map coordinates
    pub geometry: GridGeometry,
    /// Elevation raster giving every point its z coordinate
    pub elevation: &'a Raster,
    /// Ordered list of (name, values) datasets
    fields: Vec<(String, &'a Raster)>,
}

impl<'a> SurfaceGrid<'a> {
    /// New surface over `elevation` with no extra fields
    pub fn new(geometry: GridGeometry, elevation: &'a Raster) -> Self {
        Self {
            geometry,
            elevation,
            fields: Vec::new(),
        }
    }

    /// Attach a named field, checking its shape against the elevation
    pub fn push_field(&mut self, name: impl Into<String>, field: &'a Raster) -> Result<()> {
        let name = name.into();

        if !self.elevation.same_shape(field) {
            return Err(Error::ShapeMismatch {
                name,
                expected_rows: self.elevation.rows,
                expected_cols: self.elevation.cols,
                found_rows: field.rows,
                found_cols: field.cols,
            });
        }

        self.fields.push((name, field));
        Ok(())
    }

    /// The attached fields in write order
    pub fn fields(&self) -> &[(String, &'a Raster)] {
        &self.fields
    }

    /// Number of grid points in the surface
    pub fn points(&self) -> usize {
        self.elevation.len()
    }
}
