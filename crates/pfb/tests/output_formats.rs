//! Integration tests for volume output formats

use htools_pfb::{
    read_pfb, write_ascii_pretty, write_json, write_pfb, write_sa, GridHeader, Pfb,
};
use htools_raster::vtk::{surface_to_vtk, write_vtk, SurfaceGrid, VtkFormat};
use htools_raster::{GridGeometry, Raster};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn scratch() -> TempDir {
    TempDir::new().unwrap()
}

/// 3x2x2 volume with distinct values for order-sensitive checks
#[fixture]
fn small() -> Pfb {
    let header = GridHeader {
        x0: 100.0,
        y0: 200.0,
        z0: 0.0,
        nx: 3,
        ny: 2,
        nz: 2,
        dx: 30.0,
        dy: 30.0,
        dz: 1.0,
        n_subgrids: 4,
    };
    let values = (0..12).map(f64::from).collect();

    Pfb { header, values }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[rstest]
fn binary_output_collapses_to_one_subgrid(small: Pfb, scratch: TempDir) {
    let path = scratch.path().join("untiled.pfb");
    write_pfb(&small, &path).unwrap();

    // 64-byte header, one 36-byte subgrid header, 12 values
    assert_eq!(std::fs::read(&path).unwrap().len(), 196);

    let restored = read_pfb(&path).unwrap();
    let mut expected = small.header.clone();
    expected.n_subgrids = 1;

    assert_eq!(restored.header, expected);
    assert_eq!(restored.values, small.values);
}

#[rstest]
fn example_file_round_trips(scratch: TempDir) {
    let original = read_pfb("./data/pfb_example.pfb").unwrap();

    let path = scratch.path().join("round_trip.pfb");
    write_pfb(&original, &path).unwrap();
    let restored = read_pfb(&path).unwrap();

    assert_eq!(restored.values, original.values);
    assert_eq!(restored.header.x0, original.header.x0);
    assert_eq!(restored.header.nz, original.header.nz);
}

#[rstest]
fn sa_lines_run_x_fastest(small: Pfb, scratch: TempDir) {
    let path = scratch.path().join("small.sa");
    write_sa(&small, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut expected = vec!["3 2 2".to_string()];
    expected.extend((0..12).map(|v| v.to_string()));

    assert_eq!(content.lines().collect::<Vec<_>>(), expected);
}

#[rstest]
fn json_keeps_header_and_values(small: Pfb, scratch: TempDir) {
    let path = scratch.path().join("small.json");
    write_json(&small, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(json["header"]["nx"], 3);
    assert_eq!(json["header"]["x0"], 100.0);
    assert_eq!(json["values"].as_array().unwrap().len(), 12);
}

#[rstest]
fn pretty_text_is_wrapped_by_layer(small: Pfb, scratch: TempDir) {
    let path = scratch.path().join("small.txt");
    write_ascii_pretty(&small, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Extents     : 3x2x2"));
    assert!(content.contains("Layer[0] values:"));
    assert!(content.contains("Layer[1] values:"));
    assert!(content.lines().all(|line| line.len() <= 80));
}

#[rstest]
fn snow_layer_drapes_onto_a_surface(scratch: TempDir) {
    let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
    let snow = pfb.layer(10).unwrap();
    let elevation = Raster::from_values(10, 10, vec![1500.0; 100]).unwrap();

    let geometry = GridGeometry::new(pfb.header.x0, pfb.header.y0, pfb.header.dx).unwrap();
    let mut surface = SurfaceGrid::new(geometry, &elevation);
    surface.push_field("SWE", &snow).unwrap();

    let path = scratch.path().join("snow.vtk");
    write_vtk(surface_to_vtk(&surface), &path, VtkFormat::LegacyBinary).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(contains(&bytes, b"DATASET STRUCTURED_GRID"));
    assert!(contains(&bytes, b"DIMENSIONS 10 10 1"));
    assert!(contains(&bytes, b"POINTS 100 double"));
    assert!(contains(&bytes, b"SCALARS SWE double"));
}
