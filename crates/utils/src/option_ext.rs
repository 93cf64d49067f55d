use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Format the contained value, or `"none"` when there is none
    ///
    /// Saves a match on every call site when logging optional configuration
    /// like origin overrides. Anything `Display` works.
    ///
    /// ```rust
    /// # use htools_utils::OptionExt;
    /// let x0: Option<f64> = Some(565500.0);
    /// assert_eq!(x0.display(), "565500");
    ///
    /// let x0: Option<f64> = None;
    /// assert_eq!(x0.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        self.as_ref()
            .map_or_else(|| "none".to_string(), |value| f!("{value}"))
    }
}
