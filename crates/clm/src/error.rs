//! Result and Error types for the clm module

/// Type alias for `Result<T, clm::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `htools-clm`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure in a raster operation
    #[error("failure in raster operation")]
    RasterError(#[from] htools_raster::Error),

    /// Land cover code with no vegetation class in the classification
    #[error("land cover code {code} has no vegetation class")]
    UnmappedLandCover { code: i32 },

    /// Failure to infer a classification scheme from a string
    #[error("failed to infer classification from \"{0}\"")]
    UnknownClassification(String),

    /// Soil column deeper than the indicator volume holding it
    #[error("{soil_layers} soil layers do not fit in {layers} layers")]
    TooManySoilLayers { layers: usize, soil_layers: usize },

    /// Indicator volumes must have at least one layer
    #[error("indicator volume needs at least one layer")]
    EmptyColumn,
}
