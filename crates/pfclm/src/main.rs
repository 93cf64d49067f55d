//! Command line tool for preparing ParFlow-CLM input files from rasters

// standard library
use std::path::PathBuf;
use std::process::ExitCode;

// htools modules
use htools_clm::{stack_indicator, write_vegm, Classification, SiteParams};
use htools_raster::{read_asc, read_sa, Raster};

// external crates
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};

type Result<T> = core::result::Result<T, Error>;

/// Failures from any of the preprocessing steps
#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Clm(#[from] htools_clm::Error),

    #[error(transparent)]
    Pfb(#[from] htools_pfb::Error),

    #[error(transparent)]
    Raster(#[from] htools_raster::Error),
}

/// Prepare ParFlow-CLM inputs from common raster formats
///
/// Ascii grid rasters are read north-up, as published, and flipped into
/// the south-up row order that ParFlow grids use. Simple ascii inputs are
/// taken to be grid-ordered already and left alone.
///
/// Examples
/// --------
///
///  Convert an elevation raster for the solid file builder:
///     $ pfclm dem elevation.asc --skip 6
///
///  Vegetation table from NLCD land cover:
///     $ pfclm vegm landcover.asc --skip 6 --lat 43.72 --lon -116.11
///
///  Subsurface indicator with 4 soil layers in a 20 layer column:
///     $ pfclm indicator soil.sa -l 20 -s 4 -o indicator.sa
#[derive(Parser)]
#[command(
    verbatim_doc_comment,
    name = "pfclm",
    author,
    version,
    arg_required_else_help(true)
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an elevation raster to simple ascii
    Dem(DemArgs),
    /// Build the CLM vegetation table from a land cover raster
    Vegm(VegmArgs),
    /// Stack a soil survey into a subsurface indicator volume
    Indicator(IndicatorArgs),
}

#[derive(Args)]
struct DemArgs {
    /// Elevation raster, ascii grid of one value per cell
    #[arg(value_name = "file")]
    input: PathBuf,

    /// Header lines to skip
    #[arg(long, value_name = "n", default_value_t = 0)]
    skip: usize,

    /// Output path, defaults to the input with an sa extension
    #[arg(short, long, value_name = "file")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct VegmArgs {
    /// Land cover raster, ascii grid of one code per cell
    #[arg(value_name = "file")]
    input: PathBuf,

    /// Header lines to skip
    #[arg(long, value_name = "n", default_value_t = 0)]
    skip: usize,

    /// Classification scheme of the land cover codes
    #[arg(short, long, value_enum, value_name = "scheme", default_value_t = Scheme::Nlcd)]
    classification: Scheme,

    /// Site latitude in degrees north
    #[arg(long, value_name = "deg", default_value_t = 43.72)]
    lat: f64,

    /// Site longitude in degrees east
    #[arg(long, value_name = "deg", default_value_t = -116.11)]
    lon: f64,

    /// Sand fraction of the soil
    #[arg(long, value_name = "frac", default_value_t = 0.16)]
    sand: f64,

    /// Clay fraction of the soil
    #[arg(long, value_name = "frac", default_value_t = 0.26)]
    clay: f64,

    /// Soil colour index
    #[arg(long, value_name = "n", default_value_t = 2)]
    color: i32,

    /// Output path
    #[arg(short, long, value_name = "file", default_value = "drv_vegm.dat")]
    output: PathBuf,
}

#[derive(Args)]
struct IndicatorArgs {
    /// Soil index raster, ascii grid or simple ascii
    #[arg(value_name = "file")]
    input: PathBuf,

    /// Header lines to skip (ascii grid input only)
    #[arg(long, value_name = "n", default_value_t = 0)]
    skip: usize,

    /// Total layers in the indicator volume
    #[arg(short, long, value_name = "n")]
    layers: usize,

    /// Soil layers at the top of the column
    #[arg(short, long, value_name = "n")]
    soil_layers: usize,

    /// Output path, simple ascii unless it ends in .pfb
    #[arg(short, long, value_name = "file", default_value = "indicator.sa")]
    output: PathBuf,
}

/// Land cover classification variants for --classification
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scheme {
    /// National land cover database codes
    Nlcd,
    /// MODIS IGBP land cover types
    Modis,
}

impl From<Scheme> for Classification {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Nlcd => Classification::Nlcd,
            Scheme::Modis => Classification::Modis,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match &cli.command {
        Command::Dem(args) => dem(args),
        Command::Vegm(args) => vegm(args),
        Command::Indicator(args) => indicator(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Flip an elevation raster into grid order and write simple ascii
fn dem(args: &DemArgs) -> Result<()> {
    let mut raster = read_asc(&args.input, args.skip)?;
    raster.flip_vertical();
    info!("Elevation {raster}");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("sa"));

    htools_raster::write_sa(&raster, &output)?;
    info!("Written {}", output.display());

    Ok(())
}

/// Remap a land cover raster into the CLM vegetation table
fn vegm(args: &VegmArgs) -> Result<()> {
    let mut land = read_asc(&args.input, args.skip)?;
    land.flip_vertical();
    info!("Land cover {land}");

    let site = SiteParams {
        latitude: args.lat,
        longitude: args.lon,
        sand: args.sand,
        clay: args.clay,
        color: args.color,
    };

    write_vegm(&land, &site, args.classification.into(), &args.output)?;
    info!("Written {}", args.output.display());

    Ok(())
}

/// Extrude a soil survey down into a layered indicator volume
fn indicator(args: &IndicatorArgs) -> Result<()> {
    let soil = read_soil(args)?;
    let volume = stack_indicator(&soil, args.layers, args.soil_layers)?;
    info!("Indicator {volume}");

    match args.output.extension().and_then(|e| e.to_str()) {
        Some("pfb") => htools_pfb::write_pfb(&volume, &args.output)?,
        _ => htools_pfb::write_sa(&volume, &args.output)?,
    }
    info!("Written {}", args.output.display());

    Ok(())
}

/// Read the soil raster, flipping ascii grid input into grid order
fn read_soil(args: &IndicatorArgs) -> Result<Raster> {
    match args.input.extension().and_then(|e| e.to_str()) {
        Some("sa") => Ok(read_sa(&args.input)?),
        _ => {
            let mut raster = read_asc(&args.input, args.skip)?;
            raster.flip_vertical();
            Ok(raster)
        }
    }
}

/// Route log messages to stderr at the requested verbosity
fn init_logging(cli: &Cli) {
    stderrlog::new()
        .modules([module_path!(), "htools_clm", "htools_pfb", "htools_raster"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .init()
        .expect("Failed to initialise logging");
}
