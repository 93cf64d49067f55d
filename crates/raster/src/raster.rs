// crate modules
use crate::error::{Error, Result};

// htools modules
use htools_utils::{f, SliceExt, ValueExt};

/// A dense 2D grid of values in row-major order
///
/// The raster is the common currency between the file readers, the CLM input
/// writers, and the VTK converters. Values are a flat vector indexed as
/// `row * cols + col`, with the column index increasing eastwards.
///
/// Row order follows whatever the source file used. Map-style ascii formats
/// list the northernmost row first, while the modelling convention puts the
/// southernmost row at index 0, so readers leave the choice to the caller:
///
/// ```rust
/// # use htools_raster::Raster;
/// let mut dem = Raster::from_values(2, 3, vec![
///     6.0, 7.0, 8.0, // northern row
///     1.0, 2.0, 3.0, // southern row
/// ]).unwrap();
///
/// // reorder so that row 0 is the southernmost row
/// dem.flip_vertical();
/// assert_eq!(dem.get(0, 0), Some(1.0));
/// assert_eq!(dem.get(1, 2), Some(8.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Raster {
    /// Number of rows (y)
    pub rows: usize,
    /// Number of columns (x)
    pub cols: usize,
    /// Flat row-major values, `row * cols + col`
    pub values: Vec<f64>,
}

impl Raster {
    /// New raster of the given shape with every value 0.0
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Wrap an existing set of values, checking the length against the shape
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyRaster);
        }

        if values.len() != rows * cols {
            return Err(Error::UnexpectedValueCount {
                expected: rows * cols,
                found: values.len(),
            });
        }

        Ok(Self { rows, cols, values })
    }

    /// Value at (`row`, `col`), or `None` when outside the raster
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Total number of values in the raster
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check for a raster with no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check two rasters cover the same number of rows and columns
    pub fn same_shape(&self, other: &Raster) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Reverse the row order in place
    ///
    /// Ascii map formats store the top row first. The simulator convention is
    /// the other way up, with y increasing away from row 0, so source rasters
    /// are flipped once on ingest.
    pub fn flip_vertical(&mut self) {
        let cols = self.cols;
        for row in 0..self.rows / 2 {
            let opposite = self.rows - 1 - row;
            let (head, tail) = self.values.split_at_mut(opposite * cols);
            head[row * cols..(row + 1) * cols].swap_with_slice(&mut tail[..cols]);
        }
    }
}

impl std::fmt::Display for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Raster {\n".to_string();
        s += &f!("    shape: {} rows x {} cols\n", self.rows, self.cols);
        s += &f!("    values: {}\n", self.len());
        if let (Ok(min), Ok(max)) = (self.values.try_min(), self.values.try_max()) {
            s += &f!("    range: {} to {}\n", min.sci(5, 2), max.sci(5, 2));
        }
        s += "}";
        write!(f, "{}", s)
    }
}
