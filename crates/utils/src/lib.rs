//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, finding the range of a field of floats or using prettier
//! formatting for scientific numbers are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod option_ext;
mod slice_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use option_ext::OptionExt;
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
