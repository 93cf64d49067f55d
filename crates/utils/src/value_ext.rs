use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Scientific notation with a fixed mantissa and exponent width
    ///
    /// The standard `{:e}` formatting leaves the exponent unpadded and only
    /// signs it when negative, which makes columns of values ragged. Field
    /// ranges in logs and file summaries all go through this instead.
    ///
    /// Implemented for anything `LowerExp`, which covers every numerical
    /// primitive worth printing.
    ///
    /// ```rust
    /// # use htools_utils::ValueExt;
    /// let depth = -0.015;
    /// assert_eq!(depth.sci(5, 2), "-1.50000e-02".to_string());
    /// assert_eq!((4837000.0).sci(5, 2), "4.83700e+06".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", self, precision = precision);
        // Safe to `unwrap` as `{:e}` always produces an exponent marker
        let (mantissa, exponent) = formatted.split_once('e').unwrap();
        // Sign the exponent explicitly and zero-pad it to a fixed width
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}
