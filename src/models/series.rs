//! Index-aligned indicator series.

/// A named indicator's values, aligned 1:1 with the candle window.
///
/// Positions before an indicator's lookback is satisfied hold `None`, the
/// explicit undefined marker, which serializes as JSON `null`.
pub type Series = Vec<Option<f64>>;
