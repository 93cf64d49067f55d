//! Integration tests for binary grid file reading

use htools_pfb::{read_pfb, Error, GridHeader, PfbReader, Subgrid};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn scratch() -> TempDir {
    TempDir::new().unwrap()
}

/// Encode a global header in the big-endian file layout
fn encode_header(header: &GridHeader) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(GridHeader::BYTE_LENGTH);
    for value in [header.x0, header.y0, header.z0] {
        bytes.extend(value.to_be_bytes());
    }
    for value in [header.nx, header.ny, header.nz] {
        bytes.extend(value.to_be_bytes());
    }
    for value in [header.dx, header.dy, header.dz] {
        bytes.extend(value.to_be_bytes());
    }
    bytes.extend(header.n_subgrids.to_be_bytes());
    bytes
}

/// Encode a subgrid header in the big-endian file layout
fn encode_subgrid(subgrid: &Subgrid) -> Vec<u8> {
    [
        subgrid.ix,
        subgrid.iy,
        subgrid.iz,
        subgrid.nnx,
        subgrid.nny,
        subgrid.nnz,
        subgrid.rx,
        subgrid.ry,
        subgrid.rz,
    ]
    .iter()
    .flat_map(|value| value.to_be_bytes())
    .collect()
}

/// Payload in file order using the pattern value = x + 10y + 100z
fn graded_payload(subgrid: &Subgrid) -> Vec<u8> {
    let mut bytes = Vec::new();
    for dz in 0..subgrid.nnz {
        for dy in 0..subgrid.nny {
            for dx in 0..subgrid.nnx {
                let value = f64::from(subgrid.ix + dx)
                    + 10.0 * f64::from(subgrid.iy + dy)
                    + 100.0 * f64::from(subgrid.iz + dz);
                bytes.extend(value.to_be_bytes());
            }
        }
    }
    bytes
}

fn constant_payload(count: usize, value: f64) -> Vec<u8> {
    std::iter::repeat(value.to_be_bytes())
        .take(count)
        .flatten()
        .collect()
}

fn header_4x3x2(n_subgrids: i32) -> GridHeader {
    GridHeader {
        x0: 100.0,
        y0: 200.0,
        z0: 0.0,
        nx: 4,
        ny: 3,
        nz: 2,
        dx: 30.0,
        dy: 30.0,
        dz: 1.0,
        n_subgrids,
    }
}

fn span(ix: i32, iy: i32, iz: i32, nnx: i32, nny: i32, nnz: i32) -> Subgrid {
    Subgrid {
        ix,
        iy,
        iz,
        nnx,
        nny,
        nnz,
        rx: 1,
        ry: 1,
        rz: 1,
    }
}

fn stage(scratch: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = scratch.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[rstest]
fn example_file_assembles_every_subgrid() {
    let pfb = read_pfb("./data/pfb_example.pfb").unwrap();

    assert_eq!(pfb.header.x0, 565500.0);
    assert_eq!(pfb.header.y0, 4837000.0);
    assert_eq!(pfb.header.dx, 30.0);
    assert_eq!(pfb.header.n_subgrids, 4);
    assert_eq!(pfb.values.len(), 2000);

    // value = x + 10y + 100z across all four quarters
    assert_eq!(pfb.value_at(0, 0, 0), Some(0.0));
    assert_eq!(pfb.value_at(0, 9, 0), Some(9.0));
    assert_eq!(pfb.value_at(9, 0, 0), Some(90.0));
    assert_eq!(pfb.value_at(9, 9, 19), Some(1999.0));
    assert_eq!(pfb.value_at(4, 5, 7), Some(745.0));
}

#[rstest]
fn subgrid_order_does_not_matter(scratch: TempDir) {
    let header = header_4x3x2(1);
    let whole = span(0, 0, 0, 4, 3, 2);
    let mut single = encode_header(&header);
    single.extend(encode_subgrid(&whole));
    single.extend(graded_payload(&whole));

    let header = header_4x3x2(2);
    let left = span(0, 0, 0, 2, 3, 2);
    let right = span(2, 0, 0, 2, 3, 2);
    let mut split = encode_header(&header);
    for subgrid in [&right, &left] {
        split.extend(encode_subgrid(subgrid));
        split.extend(graded_payload(subgrid));
    }

    let single = read_pfb(stage(&scratch, "single.pfb", &single)).unwrap();
    let split = read_pfb(stage(&scratch, "split.pfb", &split)).unwrap();

    assert_eq!(single.values, split.values);
}

#[rstest]
fn uncovered_cells_default_to_zero(scratch: TempDir) {
    let patch = span(1, 1, 0, 2, 1, 1);
    let mut bytes = encode_header(&header_4x3x2(1));
    bytes.extend(encode_subgrid(&patch));
    bytes.extend(constant_payload(2, 7.5));

    let pfb = read_pfb(stage(&scratch, "patch.pfb", &bytes)).unwrap();

    assert_eq!(pfb.value_at(1, 1, 0), Some(7.5));
    assert_eq!(pfb.value_at(1, 2, 0), Some(7.5));
    assert_eq!(pfb.value_at(0, 0, 0), Some(0.0));
    assert_eq!(pfb.value_at(1, 1, 1), Some(0.0));
    assert_eq!(pfb.values.iter().filter(|v| **v == 7.5).count(), 2);
}

#[rstest]
fn headers_may_declare_no_subgrids(scratch: TempDir) {
    let bytes = encode_header(&header_4x3x2(0));
    let pfb = read_pfb(stage(&scratch, "bare.pfb", &bytes)).unwrap();

    assert_eq!(pfb.layers(), 2);
    assert_eq!(pfb.values, vec![0.0; 24]);
}

#[rstest]
#[case(0)] // empty file
#[case(32)] // half a header
#[case(63)] // one byte short
fn short_headers_are_incomplete(scratch: TempDir, #[case] length: usize) {
    let bytes = encode_header(&header_4x3x2(1));
    let path = stage(&scratch, "short.pfb", &bytes[..length]);

    assert!(matches!(read_pfb(path), Err(Error::IncompleteHeader)));
}

#[rstest]
fn truncated_subgrid_headers_are_attributed(scratch: TempDir) {
    let whole = span(0, 0, 0, 4, 3, 2);
    let mut bytes = encode_header(&header_4x3x2(2));
    bytes.extend(encode_subgrid(&whole));
    bytes.extend(graded_payload(&whole));
    bytes.extend(&encode_subgrid(&whole)[..20]);

    assert!(matches!(
        read_pfb(stage(&scratch, "cut.pfb", &bytes)),
        Err(Error::IncompleteSubgrid { index: 1 })
    ));
}

#[rstest]
fn truncated_payloads_are_attributed(scratch: TempDir) {
    let whole = span(0, 0, 0, 4, 3, 2);
    let mut bytes = encode_header(&header_4x3x2(1));
    bytes.extend(encode_subgrid(&whole));
    bytes.extend(&graded_payload(&whole)[..100]);

    assert!(matches!(
        read_pfb(stage(&scratch, "dry.pfb", &bytes)),
        Err(Error::IncompleteSubgrid { index: 0 })
    ));
}

#[rstest]
#[case(0, 3, 2, 1)] // no columns
#[case(4, -3, 2, 1)] // negative rows
#[case(4, 3, 0, 1)] // no layers
#[case(4, 3, 2, -1)] // negative subgrid count
fn nonsense_extents_are_rejected(
    scratch: TempDir,
    #[case] nx: i32,
    #[case] ny: i32,
    #[case] nz: i32,
    #[case] n_subgrids: i32,
) {
    let header = GridHeader {
        nx,
        ny,
        nz,
        n_subgrids,
        ..header_4x3x2(0)
    };
    let path = stage(&scratch, "nonsense.pfb", &encode_header(&header));

    assert!(matches!(read_pfb(path), Err(Error::InvalidDimensions { .. })));
}

#[rstest]
fn out_of_bounds_subgrids_fail_by_default(scratch: TempDir) {
    let stray = span(3, 0, 0, 2, 3, 2);
    let mut bytes = encode_header(&header_4x3x2(1));
    bytes.extend(encode_subgrid(&stray));
    bytes.extend(graded_payload(&stray));

    assert!(matches!(
        read_pfb(stage(&scratch, "stray.pfb", &bytes)),
        Err(Error::SubgridOutOfBounds { index: 0 })
    ));
}

#[rstest]
fn tolerated_subgrids_are_skipped_whole(scratch: TempDir) {
    let stray = span(3, 0, 0, 2, 3, 2);
    let whole = span(0, 0, 0, 4, 3, 2);
    let mut bytes = encode_header(&header_4x3x2(2));
    bytes.extend(encode_subgrid(&stray));
    bytes.extend(constant_payload(stray.number_of_values(), 9.9));
    bytes.extend(encode_subgrid(&whole));
    bytes.extend(graded_payload(&whole));

    let mut reader = PfbReader::new();
    reader.tolerate_out_of_bounds();
    reader.disable_progress();
    let pfb = reader
        .parse(&stage(&scratch, "mixed.pfb", &bytes))
        .unwrap();

    // the stray values were consumed but never landed
    assert!(pfb.values.iter().all(|v| *v != 9.9));
    assert_eq!(pfb.value_at(2, 3, 1), Some(123.0));
}

#[rstest]
fn negative_extents_fail_even_when_tolerated(scratch: TempDir) {
    let broken = span(0, 0, 0, -4, 3, 2);
    let mut bytes = encode_header(&header_4x3x2(1));
    bytes.extend(encode_subgrid(&broken));

    let mut reader = PfbReader::new();
    reader.tolerate_out_of_bounds();
    reader.disable_progress();

    assert!(matches!(
        reader.parse(&stage(&scratch, "broken.pfb", &bytes)),
        Err(Error::InvalidSubgridExtent { index: 0 })
    ));
}

#[rstest]
fn empty_subgrids_leave_the_cursor_aligned(scratch: TempDir) {
    let empty = span(0, 0, 0, 0, 0, 0);
    let whole = span(0, 0, 0, 4, 3, 2);
    let mut bytes = encode_header(&header_4x3x2(2));
    bytes.extend(encode_subgrid(&empty));
    bytes.extend(encode_subgrid(&whole));
    bytes.extend(graded_payload(&whole));

    let pfb = read_pfb(stage(&scratch, "padded.pfb", &bytes)).unwrap();
    assert_eq!(pfb.value_at(2, 3, 1), Some(123.0));
}

#[rstest]
fn full_span_constant_volume_reads_back_uniform(scratch: TempDir) {
    let header = GridHeader {
        x0: 565500.0,
        y0: 4837000.0,
        z0: 0.0,
        nx: 10,
        ny: 10,
        nz: 20,
        dx: 30.0,
        dy: 30.0,
        dz: 1.0,
        n_subgrids: 1,
    };
    let whole = span(0, 0, 0, 10, 10, 20);
    let mut bytes = encode_header(&header);
    bytes.extend(encode_subgrid(&whole));
    bytes.extend(constant_payload(2000, 5.0));

    let pfb = read_pfb(stage(&scratch, "uniform.pfb", &bytes)).unwrap();
    let layer = pfb.layer(10).unwrap();

    assert_eq!(layer.rows, 10);
    assert_eq!(layer.cols, 10);
    assert!(layer.values.iter().all(|v| *v == 5.0));
}

#[rstest]
fn layers_are_contiguous_rasters() {
    let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
    let raster = pfb.layer(5).unwrap();

    assert_eq!(raster.rows, 10);
    assert_eq!(raster.cols, 10);
    assert_eq!(raster.get(2, 3), Some(523.0));
    assert_eq!(raster.get(9, 9), Some(599.0));
}

#[rstest]
fn layer_requests_are_bounds_checked() {
    let pfb = read_pfb("./data/pfb_example.pfb").unwrap();

    assert!(matches!(
        pfb.layer(20),
        Err(Error::LayerOutOfBounds {
            index: 20,
            layers: 20
        })
    ));
}
