/// Result-to-display conversion.
///
/// Turns the `f64` produced by the evaluator into the text shown on the
/// calculator display: integral values without a fractional part, everything
/// else with bounded precision and no trailing zeros.
pub mod format;
