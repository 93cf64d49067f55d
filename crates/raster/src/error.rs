//! Result and Error types for the raster module

/// Type alias for `Result<T, raster::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `htools-raster` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure in the vtkio writer or parser
    #[error("vtkio error")]
    VtkioError(#[from] vtkio::Error),

    /// Failure to interpret text as raster content
    #[error("parser failed: {0}")]
    ParseError(String),

    /// A raster row with a different length to the first row
    #[error("uneven row length in row {row} (expected {expected}, found {found})")]
    UnevenRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// File or value buffer contained no raster data at all
    #[error("raster contains no values")]
    EmptyRaster,

    /// Declared extents that can not describe a raster
    #[error("invalid raster extents ({nx}, {ny}, {nz})")]
    InvalidExtents { nx: i32, ny: i32, nz: i32 },

    /// Number of values inconsistent with the declared shape
    #[error("unexpected number of values (expected {expected}, found {found})")]
    UnexpectedValueCount { expected: usize, found: usize },

    /// Two rasters that were expected to share a shape do not
    #[error(
        "inconsistent raster shape for \"{name}\" (expected {expected_rows}x{expected_cols}, found {found_rows}x{found_cols})"
    )]
    ShapeMismatch {
        name: String,
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// Grid spacing must be a positive distance
    #[error("grid spacing must be positive (found {0})")]
    NonPositiveSpacing(f64),
}
