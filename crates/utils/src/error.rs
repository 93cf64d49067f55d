//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `htools_utils`
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Range requested over a slice with nothing in it
    NoValues,

    /// Range requested over values like NAN or INFINITY
    UndefinedValues,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}
