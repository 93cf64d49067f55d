//! Write operations for grid volumes

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::grid::{byte_options, Subgrid};
use crate::volume::Pfb;

// htools modules
use htools_utils::f;

// external crates
use bincode::Options;

/// Write a [Pfb] volume back to the binary grid format
///
/// The volume is written as a single subgrid spanning the whole grid, so the
/// header of the output claims one subgrid regardless of how many the source
/// file was tiled into. The flat storage order already matches the payload
/// order of a full-span subgrid and is written out directly.
///
/// ```no_run
/// # use htools_pfb::write_pfb;
/// # use htools_pfb::read_pfb;
/// // Read the example file
/// let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
///
/// // Write the volume back out as a single block
/// write_pfb(&pfb, "./untiled.pfb");
/// ```
pub fn write_pfb<P: AsRef<Path>>(pfb: &Pfb, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    let mut header = pfb.header.clone();
    header.n_subgrids = 1;
    writer.write_all(&byte_options().serialize(&header)?)?;

    let subgrid = Subgrid {
        nnx: header.nx,
        nny: header.ny,
        nnz: header.nz,
        rx: 1,
        ry: 1,
        rz: 1,
        ..Default::default()
    };
    writer.write_all(&byte_options().serialize(&subgrid)?)?;

    for value in &pfb.values {
        writer.write_all(&value.to_be_bytes())?;
    }

    Ok(())
}

/// Write a [Pfb] volume to a ParFlow simple ascii file
///
/// The first line holds the `<nx> <ny> <nz>` grid extents, followed by one
/// value per line with x fastest, then y, then z. The flat storage order is
/// already the line order, so values are written straight through.
///
/// ```no_run
/// # use htools_pfb::write_sa;
/// # use htools_pfb::read_pfb;
/// // Read the example file
/// let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
///
/// // Write the same grid in the ascii format
/// write_sa(&pfb, "./press.sa");
/// ```
pub fn write_sa<P: AsRef<Path>>(pfb: &Pfb, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    writeln!(
        writer,
        "{} {} {}",
        pfb.header.nx, pfb.header.ny, pfb.header.nz
    )?;

    for value in &pfb.values {
        writeln!(writer, "{value}")?;
    }

    Ok(())
}

/// Write [Pfb] data to a JSON file
///
/// This is a direct serialization to a JSON string of the header extracted
/// from the file, and the full list of grid values.
///
/// For a human readable text version see [write_ascii_pretty()].
///
/// ```no_run
/// # use htools_pfb::write_json;
/// # use htools_pfb::read_pfb;
/// // Read the example file
/// let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
///
/// // Write the header and values to JSON
/// write_json(&pfb, "./press.json");
/// ```
pub fn write_json<P: AsRef<Path>>(pfb: &Pfb, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, pfb)?;
    Ok(())
}

/// Write [Pfb] data to a human readable text file
///
/// This outputs the content of the [Pfb] with metadata for useful overall
/// values to check at a glance, then each horizontal layer as a block of
/// wrapped text. For machine readable output use [write_json()] or
/// [write_sa()] instead.
///
/// ```no_run
/// # use htools_pfb::write_ascii_pretty;
/// # use htools_pfb::read_pfb;
/// // Read the example file
/// let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
///
/// // Write a human readable ascii text file
/// write_ascii_pretty(&pfb, "./press.txt");
/// ```
pub fn write_ascii_pretty<P: AsRef<Path>>(pfb: &Pfb, path: P) -> Result<()> {
    let mut writer = init_writer(path)?;

    writeln!(writer, "Grid cells  : {}", pfb.header.number_of_values())?;
    writeln!(
        writer,
        "Extents     : {}x{}x{}",
        pfb.header.nx, pfb.header.ny, pfb.header.nz
    )?;
    writeln!(
        writer,
        "Origin      : ({}, {}, {})",
        pfb.header.x0, pfb.header.y0, pfb.header.z0
    )?;
    writeln!(
        writer,
        "Cell spacing: ({}, {}, {})",
        pfb.header.dx, pfb.header.dy, pfb.header.dz
    )?;
    writeln!(writer, "Subgrids    : {}", pfb.header.n_subgrids)?;

    for (i, layer) in pfb
        .values
        .chunks_exact(pfb.header.number_of_layer_values())
        .enumerate()
    {
        writeln!(writer, "\nLayer[{i}] values:")?;

        let s = layer
            .iter()
            .map(|value| f!("{value}"))
            .collect::<Vec<String>>()
            .join(" ");

        writeln!(writer, "{}", textwrap::fill(&s, 80))?;
    }

    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
