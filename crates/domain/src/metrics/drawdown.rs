//! Running-peak drawdown over an equity curve.

/// Running maximum of the curve, starting at its first element.
#[must_use]
pub fn running_peak(curve: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    curve
        .iter()
        .map(|&value| {
            peak = peak.max(value);
            peak
        })
        .collect()
}

/// Drawdown from a peak to a value, in percent.
///
/// A non-positive peak yields 0 so that a ruined path never divides by zero.
#[inline]
#[must_use]
pub fn drawdown_pct(peak: f64, value: f64) -> f64 {
    if peak <= 0.0 {
        return 0.0;
    }
    (peak - value) / peak * 100.0
}

/// Per-step drawdown percentages, one per curve point.
#[must_use]
pub fn drawdown_series(curve: &[f64]) -> Vec<f64> {
    running_peak(curve)
        .into_iter()
        .zip(curve)
        .map(|(peak, &value)| drawdown_pct(peak, value))
        .collect()
}

/// Maximum drawdown percentage over the whole curve, including step 0.
///
/// An empty curve has no drawdown.
#[must_use]
pub fn max_drawdown_pct(curve: &[f64]) -> f64 {
    let mut peak = match curve.first() {
        Some(&first) => first,
        None => return 0.0,
    };
    let mut max_dd = 0.0_f64;
    for &value in curve {
        if value > peak {
            peak = value;
        }
        let drawdown = drawdown_pct(peak, value);
        if drawdown > max_dd {
            max_dd = drawdown;
        }
    }
    max_dd
}
