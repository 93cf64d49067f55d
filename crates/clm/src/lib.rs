//! Module for generating CLM surface input files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod indicator;
mod landcover;
mod vegm;

// Inline anything important for a nice public API
#[doc(inline)]
pub use landcover::{Classification, VEGETATION_CLASSES};

#[doc(inline)]
pub use vegm::{write_vegm, SiteParams};

#[doc(inline)]
pub use indicator::stack_indicator;

#[doc(inline)]
pub use error::{Error, Result};
