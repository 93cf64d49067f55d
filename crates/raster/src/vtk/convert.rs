// crate modules
use crate::raster::Raster;

// internal modules
use crate::vtk::builder::SurfaceToVtkBuilder;
use crate::vtk::surface::SurfaceGrid;

// external crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, DataArray, DataSet, ElementType, Extent, IOBuffer,
    StructuredGridPiece, Version, Vtk,
};

/// Convert surface grids to vtk formats for plotting
///
/// All of the logic for converting a [SurfaceGrid] into the right VTK types
/// is implemented here. The output is a single structured grid piece with the
/// elevation surface as the point geometry and every field as point data.
///
/// The fields are public and can be set directly, though the builder is the
/// recommended way in.
///
/// # Layout
///
/// Dimensions are `<cols> <rows> 1`, and points are listed row by row with
/// the column index cycling fastest, matching the row-major layout of the
/// underlying [Raster] values. Every dataset is written as `double` scalars
/// with the default lookup table.
///
/// # Formatting
///
/// Binary legacy files are byte-order sensitive in some plotting software.
/// ParaView reads either ordering, VisIt insists on big endian, so big
/// endian is the default and anything else is opt-in.
///
/// ```rust
/// # use htools_raster::vtk::SurfaceToVtk;
/// # use vtkio::model::ByteOrder;
/// let converter = SurfaceToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
/// ```
#[derive(Debug, PartialEq)]
pub struct SurfaceToVtk {
    /// Title written into the vtk header
    pub title: String,
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
}

// Public API
impl SurfaceToVtk {
    /// Start with the default configuration
    pub fn new() -> SurfaceToVtk {
        Default::default()
    }

    /// Get an instance of the [SurfaceToVtkBuilder]
    pub fn builder() -> SurfaceToVtkBuilder {
        SurfaceToVtkBuilder::default()
    }

    /// Convert a [SurfaceGrid] to a vtkio::Vtk object
    ///
    /// Once the configuration is set through either the builder or changing
    /// the fields directly, convert any [SurfaceGrid] into a Vtk ready for
    /// writing or further processing.
    pub fn convert(&self, surface: &SurfaceGrid) -> Vtk {
        Vtk {
            version: Version::Auto,
            title: self.title.clone(),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(StructuredGridPiece {
                extent: Self::extent(surface),
                points: Self::points(surface),
                data: Self::collect_attributes(surface),
            }),
        }
    }
}

impl Default for SurfaceToVtk {
    fn default() -> Self {
        SurfaceToVtkBuilder::default().build()
    }
}

/// Implementations for assembling the structured grid
impl SurfaceToVtk {
    /// Number of points along each axis, a single layer deep
    fn extent(surface: &SurfaceGrid) -> Extent {
        Extent::Dims([
            surface.elevation.cols as u32,
            surface.elevation.rows as u32,
            1,
        ])
    }

    /// One (x, y, z) triple per grid point, column index cycling fastest
    fn points(surface: &SurfaceGrid) -> IOBuffer {
        let elevation = surface.elevation;
        let eastings = surface.geometry.x_coordinates(elevation.cols);
        let northings = surface.geometry.y_coordinates(elevation.rows);

        let mut points: Vec<f64> = Vec::with_capacity(3 * elevation.len());
        for row in 0..elevation.rows {
            for col in 0..elevation.cols {
                points.push(eastings[col]);
                points.push(northings[row]);
                points.push(elevation.values[row * elevation.cols + col]);
            }
        }

        IOBuffer::F64(points)
    }

    /// Elevation first, then every attached field in insertion order
    fn collect_attributes(surface: &SurfaceGrid) -> Attributes {
        let mut attributes = Attributes::new();

        attributes
            .point
            .push(Self::point_scalars("Elevation", surface.elevation));

        for (name, field) in surface.fields() {
            attributes.point.push(Self::point_scalars(name, field));
        }

        attributes
    }

    /// A named dataset of point scalars in raster order
    fn point_scalars(name: &str, raster: &Raster) -> Attribute {
        Attribute::DataArray(DataArray {
            name: name.to_string(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: IOBuffer::F64(raster.values.clone()),
        })
    }
}
