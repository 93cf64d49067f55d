// crate modules
use crate::error::{Error, Result};

/// Origin and spacing of a uniform surface grid
///
/// Holds the map coordinates of the lower left corner and the distance
/// between neighbouring cells. The grid is square in the horizontal, which
/// matches the simulator's surface discretisation.
///
/// Coordinates are synthesised rather than stored:
///
/// ```rust
/// # use htools_raster::GridGeometry;
/// let geometry = GridGeometry::new(565500.0, 4837000.0, 30.0).unwrap();
///
/// assert_eq!(geometry.x_coordinates(3), vec![565500.0, 565530.0, 565560.0]);
/// assert_eq!(geometry.y_coordinates(2), vec![4837000.0, 4837030.0]);
/// ```
///
/// A zero or negative spacing can not describe a grid and is rejected:
///
/// ```rust
/// # use htools_raster::GridGeometry;
/// assert!(GridGeometry::new(0.0, 0.0, 0.0).is_err());
/// assert!(GridGeometry::new(0.0, 0.0, -30.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Easting of the lower left corner
    pub x0: f64,
    /// Northing of the lower left corner
    pub y0: f64,
    /// Distance between cells
    pub spacing: f64,
}

impl GridGeometry {
    /// New geometry, checking the spacing describes a real grid
    pub fn new(x0: f64, y0: f64, spacing: f64) -> Result<Self> {
        if spacing.is_nan() || spacing <= 0.0 {
            return Err(Error::NonPositiveSpacing(spacing));
        }

        Ok(Self { x0, y0, spacing })
    }

    /// Easting of every column, west to east
    pub fn x_coordinates(&self, cols: usize) -> Vec<f64> {
        (0..cols)
            .map(|col| self.x0 + (col as f64) * self.spacing)
            .collect()
    }

    /// Northing of every row, south to north
    pub fn y_coordinates(&self, rows: usize) -> Vec<f64> {
        (0..rows)
            .map(|row| self.y0 + (row as f64) * self.spacing)
            .collect()
    }
}
