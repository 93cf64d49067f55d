//! Result and Error types for the pfb module

/// Type alias for `Result<T, pfb::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `htools-pfb`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to deserialise a byte stream
    #[error("failed to deserialise byte stream")]
    UnableToDeserialise(#[from] Box<bincode::ErrorKind>),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Failure in a raster operation on an extracted layer
    #[error("failure in raster operation")]
    RasterError(#[from] htools_raster::Error),

    /// File ended before the 64-byte global header could be read
    #[error("file too short for the 64-byte global header")]
    IncompleteHeader,

    /// File ended part way through a subgrid
    #[error("file ended inside subgrid {index}")]
    IncompleteSubgrid { index: usize },

    /// Global extents must be positive with a non-negative subgrid count
    #[error("invalid global extents {nx}x{ny}x{nz} with {n_subgrids} subgrids")]
    InvalidDimensions {
        nx: i32,
        ny: i32,
        nz: i32,
        n_subgrids: i32,
    },

    /// Subgrid header claims a negative extent in at least one direction
    #[error("negative extents in subgrid {index}")]
    InvalidSubgridExtent { index: usize },

    /// Subgrid extends outside the global grid
    #[error("subgrid {index} falls outside the global grid")]
    SubgridOutOfBounds { index: usize },

    /// Requested layer does not exist in the volume
    #[error("layer {index} out of bounds for a volume of {layers} layers")]
    LayerOutOfBounds { index: usize, layers: usize },
}
