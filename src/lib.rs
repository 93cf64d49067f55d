//! `htools` is a semi-modular toolkit of fast and reliable libraries for
//! hydrological model file conversion
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use htools_utils as utils;

#[cfg(feature = "clm")]
#[cfg_attr(docsrs, doc(cfg(feature = "clm")))]
#[doc(inline)]
pub use htools_clm as clm;

#[cfg(feature = "pfb")]
#[cfg_attr(docsrs, doc(cfg(feature = "pfb")))]
#[doc(inline)]
pub use htools_pfb as pfb;

#[cfg(feature = "raster")]
#[cfg_attr(docsrs, doc(cfg(feature = "raster")))]
#[doc(inline)]
pub use htools_raster as raster;
