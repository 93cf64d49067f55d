// internal modules
use crate::vtk::SurfaceToVtk;

// external crates
use vtkio::model::ByteOrder;

/// Builder implementation for SurfaceToVtk configuration
///
/// The fields of [SurfaceToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// Setters chain, and any subset of the parameters can be given before the
/// final [build()](SurfaceToVtkBuilder::build) call turns the builder into a
/// converter. Everything left unset keeps its default.
///
/// ```rust, no_run
/// # use htools_raster::vtk::{write_vtk, SurfaceGrid, SurfaceToVtk, VtkFormat};
/// # use htools_raster::{GridGeometry, Raster};
/// # use vtkio::model::ByteOrder;
/// # let elevation = Raster::new(10, 10);
/// # let geometry = GridGeometry::new(0.0, 0.0, 30.0).unwrap();
/// # let surface = SurfaceGrid::new(geometry, &elevation);
/// // Make a new builder, change some values
/// let converter = SurfaceToVtk::builder()
///     .title("Spring melt")
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
///
/// // Convert the surface using the parameters set
/// let vtk = converter.convert(&surface);
///
/// // Write to "output.vtk" using the old ASCII text format
/// write_vtk(vtk, "./output.vtk", VtkFormat::LegacyAscii).unwrap();
/// ```
///
/// Keeping the configuration apart from the conversion also means one
/// configured converter can be reused across a whole series of surfaces.
pub struct SurfaceToVtkBuilder {
    /// Title written into the vtk header
    title: String,
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
}

impl SurfaceToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [SurfaceToVtk] type
    pub fn build(self) -> SurfaceToVtk {
        SurfaceToVtk {
            title: self.title,
            byte_order: self.byte_order,
        }
    }

    /// Set the title written into the vtk header
    ///
    /// Purely cosmetic, but useful for telling output files apart in plotting
    /// software once a batch of timesteps is loaded.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the byte ordering
    ///
    /// Defaults to big endian. VisIt refuses little endian legacy files even
    /// on little endian machines, so the default is the safe choice and this
    /// setter exists for everything else.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }
}

impl Default for SurfaceToVtkBuilder {
    fn default() -> Self {
        Self {
            title: "Structured surface grid".to_string(),
            byte_order: ByteOrder::BigEndian,
        }
    }
}
