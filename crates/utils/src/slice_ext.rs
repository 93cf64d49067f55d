use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
///
/// Gridded fields are stored as flat `Vec<f64>` throughout the htools crates,
/// so finding the value range of a raster or a volume layer comes up
/// constantly when logging and sanity checking converted files.
pub trait SliceExt<T> {
    /// Smallest value in a slice of well-defined floats
    ///
    /// Fails rather than guessing when the slice is empty or holds anything
    /// that does not order cleanly (NAN, infinities).
    ///
    /// ```rust
    /// # use htools_utils::SliceExt;
    /// # use htools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1042.1, 987.5, 1203.2].try_min(), Ok(987.5));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::UndefinedValues));
    /// assert_eq!([1.1, f64::INFINITY, 2.2].try_min(), Err(Error::UndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::NoValues));
    /// ```
    ///
    /// `min()` does not exist on iterators of floats because the primitives
    /// are not `Ord` (`NaN` compares to nothing). Once undefined values are
    /// ruled out, `total_cmp` supplies the IEEE 754 totalOrder ordering and
    /// the minimum is unambiguous.
    fn try_min(&self) -> Result<T>;

    /// Largest value in a slice of well-defined floats
    ///
    /// The counterpart to [try_min](SliceExt::try_min), with the same
    /// handling of empty and undefined input.
    ///
    /// ```rust
    /// # use htools_utils::SliceExt;
    /// # use htools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1042.1, 987.5, 1203.2].try_max(), Ok(1203.2));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_max(), Err(Error::UndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_max(), Err(Error::NoValues));
    /// ```
    fn try_max(&self) -> Result<T>;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::UndefinedValues);
        }

        self.iter()
            .copied()
            .min_by(f64::total_cmp)
            .ok_or(Error::NoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::UndefinedValues);
        }

        self.iter()
            .copied()
            .max_by(f64::total_cmp)
            .ok_or(Error::NoValues)
    }
}
