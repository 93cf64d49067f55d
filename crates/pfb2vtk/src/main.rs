//! Command line tool for converting ParFlow grid series to VTK surfaces

// standard library
use std::path::PathBuf;
use std::process::ExitCode;

// htools modules
use htools_pfb::{read_pfb_header, PfbReader};
use htools_raster::vtk::{write_vtk, SurfaceGrid, SurfaceToVtk, VtkFormat};
use htools_raster::{read_asc, GridGeometry, Raster};
use htools_utils::{f, OptionExt};

// external crates
use clap::{Parser, ValueEnum};
use kdam::par_tqdm;
use log::{debug, error, info, warn};
use rayon::prelude::*;

type Result<T> = core::result::Result<T, Error>;

/// Conversion failures from either side of the pipeline
#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Pfb(#[from] htools_pfb::Error),

    #[error(transparent)]
    Raster(#[from] htools_raster::Error),
}

/// Convert a series of ParFlow binary grid files to VTK surfaces
///
/// One horizontal layer is pulled from every timestep of a model run and
/// draped over the surface elevation, producing a structured grid file per
/// timestep with the elevation and the chosen field attached as point data.
///
/// Timestep files follow the `<prefix><index>.<suffix>.pfb` convention,
/// with the index zero-padded to a fixed width.
///
/// Examples
/// --------
///
///  Convert the snow water series of a full water year:
///     $ pfb2vtk ./run -d dem.asc -l 10 --last 364
///
///  Pressure files named like press.00100.pfb, top layer:
///     $ pfb2vtk ./run -d dem.asc -l 19 -f Pressure \
///           --prefix "press." --suffix "" --first 100 --last 200
///
///  Open the results anywhere with XML output:
///     $ pfb2vtk ./run -d dem.asc -l 10 --format xml
///
/// Notes
/// -----
///
///  By default the grid origin and spacing come from the header of the
///  first timestep file. Pass --x0/--y0/--spacing to override them, for
///  example when the headers carry index space rather than coordinates.
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    name = "pfb2vtk",
    author,
    version,
    arg_required_else_help(true)
)]
struct Cli {
    /// Directory holding the timestep files
    #[arg(value_name = "path")]
    directory: PathBuf,

    /// Surface elevation raster, ascii grid of one value per cell
    #[arg(short, long, value_name = "file")]
    dem: PathBuf,

    /// Header lines to skip in the elevation raster
    #[arg(long, value_name = "n", default_value_t = 0)]
    skip: usize,

    /// Zero-based layer to extract from every volume
    #[arg(short, long, value_name = "n")]
    layer: usize,

    /// Name of the scalar field in the output
    #[arg(short, long, value_name = "name", default_value = "SWE")]
    field: String,

    /// First timestep index
    #[arg(long, value_name = "n", default_value_t = 0)]
    first: usize,

    /// Last timestep index, defaults to --first
    #[arg(long, value_name = "n")]
    last: Option<usize>,

    /// Zero-padding width of the timestep index
    #[arg(long, value_name = "n", default_value_t = 5)]
    pad: usize,

    /// Filename text before the timestep index
    #[arg(long, value_name = "text", default_value = "")]
    prefix: String,

    /// Filename text between the index and the extension
    #[arg(long, value_name = "text", default_value = "C")]
    suffix: String,

    /// Grid origin easting, overriding the file headers
    #[arg(long, value_name = "m")]
    x0: Option<f64>,

    /// Grid origin northing, overriding the file headers
    #[arg(long, value_name = "m")]
    y0: Option<f64>,

    /// Cell spacing, overriding the file headers
    #[arg(long, value_name = "m")]
    spacing: Option<f64>,

    /// Read and discard subgrids outside the global grid
    #[arg(long)]
    lenient: bool,

    /// Directory for the output files
    #[arg(short, long, value_name = "path", default_value = ".")]
    output: PathBuf,

    /// VTK file format
    #[arg(long, value_enum, value_name = "format", default_value_t = CliFormat::Binary)]
    format: CliFormat,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Requested timestep indices, first to last inclusive
    fn timestep_indices(&self) -> Vec<usize> {
        (self.first..=self.last.unwrap_or(self.first)).collect()
    }

    /// Path of the timestep input file for `index`
    fn input_path(&self, index: usize) -> PathBuf {
        let index = f!("{index:0width$}", width = self.pad);
        let name = match self.suffix.is_empty() {
            true => f!("{}{index}.pfb", self.prefix),
            false => f!("{}{index}.{}.pfb", self.prefix, self.suffix),
        };

        self.directory.join(name)
    }

    /// Path of the output file for `index`
    fn output_path(&self, index: usize) -> PathBuf {
        let extension = match self.format {
            CliFormat::Xml => "vts",
            _ => "vtk",
        };
        let index = f!("{index:0width$}", width = self.pad);

        self.output.join(f!("{}.{index}.{extension}", self.field))
    }
}

/// File format variants for the output
#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliFormat {
    /// Legacy binary, the most compact
    Binary,
    /// Legacy ascii for inspection
    Ascii,
    /// Modern xml
    Xml,
}

impl From<CliFormat> for VtkFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Binary => VtkFormat::LegacyBinary,
            CliFormat::Ascii => VtkFormat::LegacyAscii,
            CliFormat::Xml => VtkFormat::Xml,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            error!("{failed} timesteps failed to convert");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Convert every requested timestep, returning the number that failed
fn run(cli: &Cli) -> Result<usize> {
    let indices = cli.timestep_indices();
    if indices.is_empty() {
        warn!("Nothing to convert, --first is past --last");
        return Ok(0);
    }

    // the elevation is loaded and oriented once, shared by every worker
    let mut dem = read_asc(&cli.dem, cli.skip)?;
    dem.flip_vertical();
    info!("Elevation {dem}");

    let geometry = resolve_geometry(cli, &indices)?;
    info!("Extracting layer {} as \"{}\"", cli.layer, cli.field);

    let failures = par_tqdm!(
        indices.par_iter(),
        bar_format = "Converting timesteps: {count}/{total} [{rate:.2} files/s]  ",
        disable = cli.quiet
    )
    .filter_map(|index| {
        convert_timestep(cli, geometry, &dem, *index)
            .err()
            .map(|e| (*index, e))
    })
    .collect::<Vec<_>>();

    if !cli.quiet {
        eprintln!();
    }

    for (index, error) in &failures {
        error!(
            "Timestep {index} ({}): {error}",
            cli.input_path(*index).display()
        );
    }

    Ok(failures.len())
}

/// Origin and spacing from the flags, with file header fallback
fn resolve_geometry(cli: &Cli, indices: &[usize]) -> Result<GridGeometry> {
    debug!(
        "Geometry overrides: x0 {}, y0 {}, spacing {}",
        cli.x0.display(),
        cli.y0.display(),
        cli.spacing.display()
    );

    if let (Some(x0), Some(y0), Some(spacing)) = (cli.x0, cli.y0, cli.spacing) {
        return Ok(GridGeometry::new(x0, y0, spacing)?);
    }

    let path = cli.input_path(indices[0]);
    let header = read_pfb_header(&path)?;

    if header.dx != header.dy {
        warn!(
            "Anisotropic cells in {}: using dx {} over dy {}",
            path.display(),
            header.dx,
            header.dy
        );
    }

    let geometry = GridGeometry::new(
        cli.x0.unwrap_or(header.x0),
        cli.y0.unwrap_or(header.y0),
        cli.spacing.unwrap_or(header.dx),
    )?;
    info!("Geometry from {}: {geometry:?}", path.display());

    Ok(geometry)
}

/// Read one timestep, drape the layer over the elevation, write the file
fn convert_timestep(
    cli: &Cli,
    geometry: GridGeometry,
    dem: &Raster,
    index: usize,
) -> Result<()> {
    let mut reader = PfbReader::new();
    reader.disable_progress();
    if cli.lenient {
        reader.tolerate_out_of_bounds();
    }

    let pfb = reader.parse(&cli.input_path(index))?;
    let field = pfb.layer(cli.layer)?;
    debug!("Timestep {index} field {field}");

    let mut surface = SurfaceGrid::new(geometry, dem);
    surface.push_field(cli.field.as_str(), &field)?;

    let vtk = SurfaceToVtk::builder()
        .title(f!("{} timestep {index}", cli.field))
        .build()
        .convert(&surface);
    write_vtk(vtk, cli.output_path(index), cli.format.into())?;

    Ok(())
}

/// Route log messages to stderr at the requested verbosity
fn init_logging(cli: &Cli) {
    stderrlog::new()
        .modules([module_path!(), "htools_pfb", "htools_raster"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .init()
        .expect("Failed to initialise logging");
}
