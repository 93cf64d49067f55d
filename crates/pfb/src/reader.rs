//! Read operations for ParFlow binary grid files
//!
//! # Quickstart
//!
//! The simplest way to read a full grid from file is the convenience
//! function:
//!
//! ```rust
//! # use htools_pfb::read_pfb;
//! // Read the example file into a dense volume
//! let pfb = read_pfb("./data/pfb_example.pfb").unwrap();
//!
//! // Print a summary of the data
//! println!("{pfb}");
//! ```
//!
//! Under the hood this initialises a [PfbReader]. This is made public for
//! finer control over permissive parsing and the progress bar.
//!
//! ```rust, no_run
//! # use htools_pfb::reader::PfbReader;
//! # use std::path::Path;
//! // Initialise the reader and set some options
//! let mut reader = PfbReader::new();
//! reader.tolerate_out_of_bounds(); // discard stray subgrids instead of failing
//! reader.disable_progress();       // disable the progress bar
//!
//! // Parse the file
//! let pfb = reader.parse(Path::new("path/to/press.00001.pfb")).unwrap();
//! ```
//!
//! # Implementation overview
//!
//! The file is a 64-byte global header followed by any number of subgrid
//! blocks, each a 36-byte local header and a payload of big-endian f64
//! values. See [GridHeader] and [Subgrid] for the exact byte layouts.
//!
//! The volume is allocated up front from the global extents and filled by
//! scattering each subgrid payload to its place, so subgrids may arrive in
//! any order. Cells not covered by any subgrid are left at `0.0`, and the
//! full payload of every subgrid is consumed whether or not its values are
//! kept.
//!
//! # Malformed file notes
//!
//! **Truncation is attributed to the subgrid it interrupts**
//!
//! > A file that runs dry mid-block raises
//! > [IncompleteSubgrid](crate::Error::IncompleteSubgrid) with the index of
//! > the offending subgrid, making short writes from a crashed simulation
//! > easy to spot.
//!
//! **Stray subgrids are an error by default**
//!
//! > A subgrid reaching outside the global extents raises
//! > [SubgridOutOfBounds](crate::Error::SubgridOutOfBounds) unless the
//! > reader is set to tolerate them, in which case the values are read and
//! > discarded with a warning.
//!
//! **Negative extents always fail**
//!
//! > A subgrid claiming a negative cell count in any direction has no
//! > defined payload length, so not even a permissive reader can step over
//! > it.

// standard library
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::grid::{byte_options, GridHeader, Subgrid};
use crate::volume::Pfb;

// external crates
use bincode::Options;
use kdam::{Bar, BarBuilder, BarExt};
use log::warn;

/// Read a full grid volume from a ParFlow binary file
///
/// Returns a result containing a [Pfb] with the dense volume assembled from
/// every subgrid in the file at `path`.
///
/// - `path` - Path to the pfb file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust
/// # use htools_pfb::{read_pfb, Pfb};
/// // Read every subgrid in the file into one volume
/// let pfb: Pfb = read_pfb("./data/pfb_example.pfb").unwrap();
///
/// assert_eq!(pfb.layers(), 20);
/// ```
pub fn read_pfb<P: AsRef<Path>>(path: P) -> Result<Pfb> {
    let path: &Path = Path::new(path.as_ref());
    let mut reader = PfbReader::new();
    reader.disable_progress();
    reader.parse(path)
}

/// Read only the 64-byte global header from a ParFlow binary file
///
/// Useful for picking up grid extents and geometry without decoding the
/// volume, for example to size a batch conversion up front.
///
/// ```rust
/// # use htools_pfb::read_pfb_header;
/// let header = read_pfb_header("./data/pfb_example.pfb").unwrap();
///
/// assert_eq!(header.nx, 10);
/// assert_eq!(header.dx, 30.0);
/// ```
pub fn read_pfb_header<P: AsRef<Path>>(path: P) -> Result<GridHeader> {
    let mut reader = init_reader(path)?;
    PfbReader::parse_header(&mut reader)
}

/// A reader for ParFlow binary grid files
///
/// By default any subgrid that reaches outside the global grid fails the
/// whole file. Calling `tolerate_out_of_bounds()` downgrades this to a
/// warning, with the stray values read and discarded so that well-formed
/// subgrids later in the file still land.
///
/// Minimal example:
/// ```rust
/// # use htools_pfb::reader::PfbReader;
/// # use std::path::Path;
/// let path = Path::new("./data/pfb_example.pfb");
/// let mut reader = PfbReader::new();
/// reader.disable_progress();
/// let pfb = reader.parse(path).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PfbReader {
    /// Read and discard out-of-bounds subgrids instead of failing
    tolerate_out_of_bounds: bool,
    /// Disable progress bar?
    disable_progress: bool,
}

impl PfbReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Parses the full set of subgrids from a pfb file
    pub fn parse(&self, path: &Path) -> Result<Pfb> {
        let mut reader = init_reader(path)?;

        let header = Self::parse_header(&mut reader)?;
        let values = self.parse_subgrids(&mut reader, &header)?;

        Ok(Pfb { header, values })
    }

    /// Read and discard subgrids that fall outside the global grid
    pub fn tolerate_out_of_bounds(&mut self) {
        self.tolerate_out_of_bounds = true;
    }

    /// Do not print the tqdm progress indicators
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }
}

impl PfbReader {
    /// Deserialise and sanity check the 64-byte global header
    fn parse_header(reader: &mut BufReader<File>) -> Result<GridHeader> {
        let mut buffer = [0u8; GridHeader::BYTE_LENGTH];
        reader.read_exact(&mut buffer).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => Error::IncompleteHeader,
            _ => Error::IOError(e),
        })?;

        let header: GridHeader = byte_options().deserialize(&buffer)?;

        // a grid with nothing in it is nonsense, an empty file is not
        if header.nx <= 0 || header.ny <= 0 || header.nz <= 0 || header.n_subgrids < 0 {
            return Err(Error::InvalidDimensions {
                nx: header.nx,
                ny: header.ny,
                nz: header.nz,
                n_subgrids: header.n_subgrids,
            });
        }

        Ok(header)
    }

    /// Assemble the dense volume from every subgrid in the file
    fn parse_subgrids(
        &self,
        reader: &mut BufReader<File>,
        header: &GridHeader,
    ) -> Result<Vec<f64>> {
        let mut values = vec![0.0; header.number_of_values()];
        let mut discarded = 0_usize;
        let mut bar = self.init_progress_bar(header);

        for index in 0..header.number_of_subgrids() {
            let subgrid = Self::parse_subgrid_header(reader, index)?;

            if subgrid.has_negative_extent() {
                return Err(Error::InvalidSubgridExtent { index });
            }

            if subgrid.fits_inside(header) {
                Self::scatter_subgrid_values(reader, header, &subgrid, index, &mut values)?;
            } else if self.tolerate_out_of_bounds {
                Self::discard_subgrid_values(reader, &subgrid, index)?;
                discarded += 1;
            } else {
                return Err(Error::SubgridOutOfBounds { index });
            }

            bar.update(1)?;
        }

        if discarded > 0 {
            warn!("Discarded {discarded} subgrids outside the global grid");
        }

        Ok(values)
    }

    /// Deserialise the next 36-byte subgrid header
    fn parse_subgrid_header(reader: &mut BufReader<File>, index: usize) -> Result<Subgrid> {
        let mut buffer = [0u8; Subgrid::BYTE_LENGTH];
        reader.read_exact(&mut buffer).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => Error::IncompleteSubgrid { index },
            _ => Error::IOError(e),
        })?;

        Ok(byte_options().deserialize(&buffer)?)
    }

    /// Scatter one subgrid payload into place in the dense volume
    fn scatter_subgrid_values(
        reader: &mut BufReader<File>,
        header: &GridHeader,
        subgrid: &Subgrid,
        index: usize,
        values: &mut [f64],
    ) -> Result<()> {
        let columns = header.columns();
        let rows = header.rows();

        for dz in 0..subgrid.layers() {
            let layer = subgrid.iz as usize + dz;

            for dy in 0..subgrid.rows() {
                let row = subgrid.iy as usize + dy;
                let start = (layer * rows + row) * columns + subgrid.ix as usize;

                for dx in 0..subgrid.columns() {
                    values[start + dx] = read_value(reader, index)?;
                }
            }
        }

        Ok(())
    }

    /// Consume a payload whole so the cursor lands on the next subgrid
    fn discard_subgrid_values(
        reader: &mut BufReader<File>,
        subgrid: &Subgrid,
        index: usize,
    ) -> Result<()> {
        for _ in 0..subgrid.number_of_values() {
            read_value(reader, index)?;
        }

        Ok(())
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self, header: &GridHeader) -> Bar {
        BarBuilder::default()
            .total(header.number_of_subgrids())
            .unit(" subgrids")
            .unit_scale(true)
            .disable(self.disable_progress)
            .bar_format("{count}/{total} subgrids [{rate} subgrids/s]   ")
            .build()
            .expect("Failed to initialise progress bar")
    }
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Read the next big-endian f64, attributing truncation to subgrid `index`
fn read_value(reader: &mut BufReader<File>, index: usize) -> Result<f64> {
    let mut buffer = [0u8; std::mem::size_of::<f64>()];
    reader.read_exact(&mut buffer).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => Error::IncompleteSubgrid { index },
        _ => Error::IOError(e),
    })?;

    Ok(f64::from_be_bytes(buffer))
}
