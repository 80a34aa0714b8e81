//! Rolling-window and smoothing primitives.
//!
//! All rolling functions follow pandas windowing semantics: the window at
//! row `i` covers the last `period` rows (clipped at the start of the
//! series), `None` entries are excluded, and a value is produced only when
//! at least `min_periods` defined entries are present.

/// Additive guard applied to every risky denominator in the library.
pub const EPSILON: f64 = 1e-8;

/// Wrap a fully-defined slice into an `Option` series.
pub fn dense(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|&v| Some(v)).collect()
}

/// Rolling mean over the trailing `period` rows.
pub fn rolling_mean(
    values: &[Option<f64>],
    period: usize,
    min_periods: usize,
) -> Vec<Option<f64>> {
    rolling_apply(values, period, min_periods, |window| {
        window.iter().sum::<f64>() / window.len() as f64
    })
}

/// Rolling population standard deviation (ddof = 0) over the trailing
/// `period` rows.
pub fn rolling_std(
    values: &[Option<f64>],
    period: usize,
    min_periods: usize,
) -> Vec<Option<f64>> {
    rolling_apply(values, period, min_periods, |window| {
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let var =
            window.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / window.len() as f64;
        var.sqrt()
    })
}

/// Rolling mean absolute deviation about the window mean.
pub fn rolling_mad(
    values: &[Option<f64>],
    period: usize,
    min_periods: usize,
) -> Vec<Option<f64>> {
    rolling_apply(values, period, min_periods, |window| {
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        window.iter().map(|v| (v - mean).abs()).sum::<f64>() / window.len() as f64
    })
}

/// Rolling minimum requiring a full window.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling_extremum(values, period, |acc, v| acc.min(v))
}

/// Rolling maximum requiring a full window.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling_extremum(values, period, |acc, v| acc.max(v))
}

/// Exponential moving average over `span`, seeded with the first input.
///
/// `alpha = 2 / (span + 1)`; the first output equals the first input.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);
    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// True range of one candle given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Min-max normalization over the defined values of a series.
///
/// Undefined entries stay undefined; the denominator carries the additive
/// epsilon guard.
pub fn min_max_normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    if defined.is_empty() {
        return values.to_vec();
    }
    let min = defined.iter().fold(f64::INFINITY, |a, &v| a.min(v));
    let max = defined.iter().fold(f64::NEG_INFINITY, |a, &v| a.max(v));
    let range = max - min + EPSILON;
    values
        .iter()
        .map(|v| v.map(|v| (v - min) / range))
        .collect()
}

fn rolling_apply(
    values: &[Option<f64>],
    period: usize,
    min_periods: usize,
    f: impl Fn(&[f64]) -> f64,
) -> Vec<Option<f64>> {
    let min_periods = min_periods.max(1);
    let mut out = Vec::with_capacity(values.len());
    let mut window = Vec::with_capacity(period);
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(period);
        window.clear();
        window.extend(values[start..=i].iter().flatten().copied());
        if window.len() >= min_periods {
            out.push(Some(f(&window)));
        } else {
            out.push(None);
        }
    }
    out
}

fn rolling_extremum(
    values: &[f64],
    period: usize,
    fold: impl Fn(f64, f64) -> f64,
) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i + 1 < period {
            out.push(None);
            continue;
        }
        let window = &values[i + 1 - period..=i];
        let mut acc = window[0];
        for &v in &window[1..] {
            acc = fold(acc, v);
        }
        out.push(Some(acc));
    }
    out
}
