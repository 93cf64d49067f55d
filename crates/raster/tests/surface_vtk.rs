//! Integration tests for the structured grid vtk conversion and file staging

use htools_raster::vtk::{surface_to_vtk, write_vtk, SurfaceGrid, SurfaceToVtk, VtkFormat};
use htools_raster::{Error, GridGeometry, Raster};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use vtkio::model::{Attribute, ByteOrder, DataSet, IOBuffer, Piece, Vtk};

#[fixture]
fn geometry() -> GridGeometry {
    GridGeometry::new(565500.0, 4837000.0, 30.0).unwrap()
}

/// 10x10 ramp of elevations, row-major from the southwest corner
#[fixture]
fn elevation() -> Raster {
    let values = (0..100).map(|i| 1000.0 + i as f64).collect();
    Raster::from_values(10, 10, values).unwrap()
}

/// Uniform snow water field matching the elevation footprint
#[fixture]
fn swe() -> Raster {
    Raster::from_values(10, 10, vec![5.0; 100]).unwrap()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[rstest]
fn conversion_builds_a_single_inline_piece(
    geometry: GridGeometry,
    elevation: Raster,
    swe: Raster,
) {
    let mut surface = SurfaceGrid::new(geometry, &elevation);
    surface.push_field("SWE", &swe).unwrap();
    let vtk = surface_to_vtk(&surface);

    assert_eq!(vtk.byte_order, ByteOrder::BigEndian);

    let DataSet::StructuredGrid { pieces, .. } = vtk.data else {
        panic!("expected a structured grid dataset");
    };
    assert_eq!(pieces.len(), 1);

    let Piece::Inline(piece) = &pieces[0] else {
        panic!("expected an inline piece");
    };
    assert_eq!(piece.points.len(), 300);

    let names = piece
        .data
        .point
        .iter()
        .map(|attribute| match attribute {
            Attribute::DataArray(array) => array.name.as_str(),
            _ => panic!("expected scalar data arrays"),
        })
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Elevation", "SWE"]);
}

#[rstest]
fn points_start_at_the_origin(geometry: GridGeometry, elevation: Raster) {
    let surface = SurfaceGrid::new(geometry, &elevation);
    assert_eq!(surface.points(), 100);

    let vtk = surface_to_vtk(&surface);
    let DataSet::StructuredGrid { pieces, .. } = vtk.data else {
        panic!("expected a structured grid dataset");
    };
    let Piece::Inline(piece) = &pieces[0] else {
        panic!("expected an inline piece");
    };
    let IOBuffer::F64(points) = &piece.points else {
        panic!("expected f64 point coordinates");
    };

    // southwest corner first, then eastwards along the row
    assert_eq!(&points[..3], &[565500.0, 4837000.0, 1000.0]);
    assert_eq!(&points[3..6], &[565530.0, 4837000.0, 1001.0]);

    // second row steps north by one cell
    assert_eq!(&points[30..33], &[565500.0, 4837030.0, 1010.0]);
}

#[rstest]
fn legacy_binary_headers_are_ascii(geometry: GridGeometry, elevation: Raster, swe: Raster) {
    let scratch = TempDir::new().unwrap();
    let path = scratch.path().join("surface.vtk");

    let mut surface = SurfaceGrid::new(geometry, &elevation);
    surface.push_field("SWE", &swe).unwrap();
    write_vtk(surface_to_vtk(&surface), &path, VtkFormat::LegacyBinary).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(contains(&bytes, b"# vtk DataFile Version"));
    assert!(contains(&bytes, b"BINARY"));
    assert!(contains(&bytes, b"DATASET STRUCTURED_GRID"));
    assert!(contains(&bytes, b"DIMENSIONS 10 10 1"));
    assert!(contains(&bytes, b"POINTS 100 double"));
    assert!(contains(&bytes, b"POINT_DATA 100"));
    assert!(contains(&bytes, b"SCALARS Elevation double"));
    assert!(contains(&bytes, b"SCALARS SWE double"));
    assert!(contains(&bytes, b"LOOKUP_TABLE default"));
}

#[rstest]
fn legacy_ascii_spells_out_values(geometry: GridGeometry, elevation: Raster) {
    let scratch = TempDir::new().unwrap();
    let path = scratch.path().join("surface.vtk");

    let surface = SurfaceGrid::new(geometry, &elevation);
    write_vtk(surface_to_vtk(&surface), &path, VtkFormat::LegacyAscii).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("ASCII"));
    assert!(content.contains("DIMENSIONS 10 10 1"));
    assert!(content.contains("SCALARS Elevation double"));
    assert!(content.contains("565500"));
    assert!(content.contains("4837000"));
}

#[rstest]
fn written_files_import_cleanly(geometry: GridGeometry, elevation: Raster, swe: Raster) {
    let scratch = TempDir::new().unwrap();
    let path = scratch.path().join("surface.vtk");

    let mut surface = SurfaceGrid::new(geometry, &elevation);
    surface.push_field("SWE", &swe).unwrap();
    write_vtk(surface_to_vtk(&surface), &path, VtkFormat::LegacyBinary).unwrap();

    let restored = Vtk::import(&path).unwrap();
    let DataSet::StructuredGrid { pieces, .. } = restored.data else {
        panic!("expected a structured grid dataset");
    };
    let Piece::Inline(piece) = &pieces[0] else {
        panic!("expected an inline piece");
    };

    assert_eq!(piece.points.len(), 300);
    assert_eq!(piece.data.point.len(), 2);
}

#[rstest]
fn conversion_is_repeatable(geometry: GridGeometry, elevation: Raster, swe: Raster) {
    let scratch = TempDir::new().unwrap();
    let first = scratch.path().join("first.vtk");
    let second = scratch.path().join("second.vtk");

    let mut surface = SurfaceGrid::new(geometry, &elevation);
    surface.push_field("SWE", &swe).unwrap();

    write_vtk(surface_to_vtk(&surface), &first, VtkFormat::LegacyBinary).unwrap();
    write_vtk(surface_to_vtk(&surface), &second, VtkFormat::LegacyBinary).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[rstest]
fn mismatched_fields_never_reach_the_writer(geometry: GridGeometry, elevation: Raster) {
    let narrow = Raster::new(10, 9);
    let mut surface = SurfaceGrid::new(geometry, &elevation);

    let result = surface.push_field("SWE", &narrow);
    assert!(matches!(
        result,
        Err(Error::ShapeMismatch {
            expected_cols: 10,
            found_cols: 9,
            ..
        })
    ));
    assert!(surface.fields().is_empty());
}

#[rstest]
fn failed_writes_leave_nothing_behind(geometry: GridGeometry, elevation: Raster) {
    let scratch = TempDir::new().unwrap();
    let path = scratch.path().join("missing").join("surface.vtk");

    let surface = SurfaceGrid::new(geometry, &elevation);
    let result = write_vtk(surface_to_vtk(&surface), &path, VtkFormat::LegacyBinary);

    assert!(result.is_err());
    assert!(!path.exists());
    assert!(std::fs::read_dir(scratch.path()).unwrap().next().is_none());
}

#[rstest]
fn builder_overrides_title_and_byte_order(geometry: GridGeometry, elevation: Raster) {
    let converter = SurfaceToVtk::builder()
        .title("Snow cover, day 42")
        .byte_order(ByteOrder::LittleEndian)
        .build();

    let surface = SurfaceGrid::new(geometry, &elevation);
    let vtk = converter.convert(&surface);

    assert_eq!(vtk.title, "Snow cover, day 42");
    assert_eq!(vtk.byte_order, ByteOrder::LittleEndian);
}
