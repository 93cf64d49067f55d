//! Module for working with ParFlow binary grid files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod grid;
mod volume;
mod writer;

// Public for fine control over parsing options
pub mod reader;

// Inline anything important for a nice public API
#[doc(inline)]
pub use grid::{GridHeader, Subgrid};

#[doc(inline)]
pub use volume::Pfb;

#[doc(inline)]
pub use reader::{read_pfb, read_pfb_header, PfbReader};

#[doc(inline)]
pub use writer::{write_ascii_pretty, write_json, write_pfb, write_sa};

#[doc(inline)]
pub use error::{Error, Result};
