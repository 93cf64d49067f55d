// external crates
use bincode::Options;
use serde::{Deserialize, Serialize};

/// bincode options matching the fixed-width big-endian file encoding
pub(crate) fn byte_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_big_endian()
}

/// Global grid description from the 64-byte file header
///
/// The byte layout is a fixed sequence of big-endian values. Field order
/// matches the order on disk exactly.
///
/// ```text
/// <x0> <y0> <z0>    grid origin            f64
/// <nx> <ny> <nz>    number of cells        i32
/// <dx> <dy> <dz>    cell spacing           f64
/// <n_subgrids>      subgrid count          i32
/// ```
///
/// `nx` maps to columns (west to east), `ny` to rows (south to north), and
/// `nz` to layers (bottom to top).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GridHeader {
    /// Grid origin in x
    pub x0: f64,
    /// Grid origin in y
    pub y0: f64,
    /// Grid origin in z
    pub z0: f64,

    /// Number of cells in x
    pub nx: i32,
    /// Number of cells in y
    pub ny: i32,
    /// Number of cells in z
    pub nz: i32,

    /// Cell spacing in x
    pub dx: f64,
    /// Cell spacing in y
    pub dy: f64,
    /// Cell spacing in z
    pub dz: f64,

    /// Number of subgrid blocks that follow the header
    pub n_subgrids: i32,
}

impl GridHeader {
    /// Size of the encoded header in bytes
    pub const BYTE_LENGTH: usize = 64;

    /// Number of columns (cells in x)
    pub fn columns(&self) -> usize {
        self.nx as usize
    }

    /// Number of rows (cells in y)
    pub fn rows(&self) -> usize {
        self.ny as usize
    }

    /// Number of layers (cells in z)
    pub fn layers(&self) -> usize {
        self.nz as usize
    }

    /// Number of subgrid blocks expected in the file
    pub fn number_of_subgrids(&self) -> usize {
        self.n_subgrids as usize
    }

    /// Total number of values expected in the full grid
    pub fn number_of_values(&self) -> usize {
        self.columns() * self.rows() * self.layers()
    }

    /// Number of values in a single horizontal layer
    pub fn number_of_layer_values(&self) -> usize {
        self.columns() * self.rows()
    }
}

impl std::fmt::Display for GridHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Local grid description from a 36-byte subgrid header
///
/// Nine big-endian i32 values describe where the block of values that follows
/// sits within the global grid.
///
/// ```text
/// <ix>  <iy>  <iz>     cell offsets into the global grid
/// <nnx> <nny> <nnz>    number of cells in the subgrid
/// <rx>  <ry>  <rz>     refinement levels
/// ```
///
/// The payload contains `nnx * nny * nnz` f64 values ordered z, then y, then
/// x fastest. Refinement levels are decoded but play no part in assembly.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Subgrid {
    /// Cell offset into the global grid in x
    pub ix: i32,
    /// Cell offset into the global grid in y
    pub iy: i32,
    /// Cell offset into the global grid in z
    pub iz: i32,

    /// Number of cells in x
    pub nnx: i32,
    /// Number of cells in y
    pub nny: i32,
    /// Number of cells in z
    pub nnz: i32,

    /// Refinement level in x
    pub rx: i32,
    /// Refinement level in y
    pub ry: i32,
    /// Refinement level in z
    pub rz: i32,
}

impl Subgrid {
    /// Size of the encoded subgrid header in bytes
    pub const BYTE_LENGTH: usize = 36;

    /// Number of columns (cells in x)
    pub fn columns(&self) -> usize {
        self.nnx as usize
    }

    /// Number of rows (cells in y)
    pub fn rows(&self) -> usize {
        self.nny as usize
    }

    /// Number of layers (cells in z)
    pub fn layers(&self) -> usize {
        self.nnz as usize
    }

    /// Number of values in the payload that follows the subgrid header
    pub fn number_of_values(&self) -> usize {
        self.columns() * self.rows() * self.layers()
    }

    /// Does any direction claim a negative number of cells?
    pub fn has_negative_extent(&self) -> bool {
        self.nnx < 0 || self.nny < 0 || self.nnz < 0
    }

    /// Does the subgrid sit entirely within the global grid?
    ///
    /// Widened to i64 so that extreme offsets cannot wrap the comparison.
    pub fn fits_inside(&self, header: &GridHeader) -> bool {
        let (ix, iy, iz) = (self.ix as i64, self.iy as i64, self.iz as i64);

        ix >= 0
            && iy >= 0
            && iz >= 0
            && ix + self.nnx as i64 <= header.nx as i64
            && iy + self.nny as i64 <= header.ny as i64
            && iz + self.nnz as i64 <= header.nz as i64
    }
}

impl std::fmt::Display for Subgrid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
