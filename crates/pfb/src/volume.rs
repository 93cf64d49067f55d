// crate modules
use crate::error::{Error, Result};
use crate::grid::GridHeader;

// htools modules
use htools_raster::Raster;
use htools_utils::f;

// external crates
use serde::Serialize;

/// A dense volume of grid values assembled from a ParFlow binary file
///
/// Subgrid tiling is an artefact of the file format and is dissolved on read.
/// Values are stored flat with the layer slowest and the column fastest, so a
/// whole horizontal layer is one contiguous row-major block:
///
/// ```text
/// index = (layer * rows + row) * columns + column
/// ```
///
/// The header is kept verbatim, including the subgrid count of the source
/// file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pfb {
    /// Global grid description from the file header
    pub header: GridHeader,
    /// Every grid value, ordered layer, row, column
    pub values: Vec<f64>,
}

impl Pfb {
    /// Number of columns (cells in x)
    pub fn columns(&self) -> usize {
        self.header.columns()
    }

    /// Number of rows (cells in y)
    pub fn rows(&self) -> usize {
        self.header.rows()
    }

    /// Number of layers (cells in z)
    pub fn layers(&self) -> usize {
        self.header.layers()
    }

    /// Value of the cell at `row`, `column` in `layer`, if there is one
    ///
    /// ```rust
    /// # use htools_pfb::read_pfb;
    /// let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
    ///
    /// assert_eq!(pfb.value_at(3, 7, 2), Some(237.0));
    /// assert_eq!(pfb.value_at(99, 7, 2), None);
    /// ```
    pub fn value_at(&self, row: usize, column: usize, layer: usize) -> Option<f64> {
        if row < self.rows() && column < self.columns() && layer < self.layers() {
            Some(self.values[(layer * self.rows() + row) * self.columns() + column])
        } else {
            None
        }
    }

    /// Extract a single horizontal layer as a [Raster]
    ///
    /// Row and column order are preserved, so row 0 of the raster is the
    /// southernmost row of the grid.
    ///
    /// ```rust
    /// # use htools_pfb::read_pfb;
    /// let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
    /// let raster = pfb.layer(10).unwrap();
    ///
    /// assert_eq!(raster.rows, 10);
    /// assert_eq!(raster.get(0, 0), Some(1000.0));
    /// ```
    pub fn layer(&self, layer: usize) -> Result<Raster> {
        if layer >= self.layers() {
            return Err(Error::LayerOutOfBounds {
                index: layer,
                layers: self.layers(),
            });
        }

        let length = self.header.number_of_layer_values();
        let start = layer * length;
        let values = self.values[start..start + length].to_vec();

        Ok(Raster::from_values(self.rows(), self.columns(), values)?)
    }
}

impl std::fmt::Display for Pfb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Pfb {\n".to_string();
        s += &f!(
            "    cells: {} ({}x{}x{})\n",
            self.header.number_of_values(),
            self.header.nx,
            self.header.ny,
            self.header.nz
        );
        s += &f!(
            "    origin: ({}, {}, {})\n",
            self.header.x0,
            self.header.y0,
            self.header.z0
        );
        s += &f!(
            "    spacing: ({}, {}, {})\n",
            self.header.dx,
            self.header.dy,
            self.header.dz
        );
        s += &f!("    subgrids: {}\n}}", self.header.n_subgrids);

        write!(f, "{}", s)
    }
}
