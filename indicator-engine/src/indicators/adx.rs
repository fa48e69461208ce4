use super::{mean_of_defined, DerivedSeries};

/// Final ADX readout: only the most recent values are reported
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdxSummary {
    pub adx: Option<f64>,
    pub plus_di: Option<f64>,
    pub minus_di: Option<f64>,
}

/// Wilder's smoothing: seed at `period - 1` with the mean of the first
/// `period` inputs, then `out[i] = (out[i-1] * (period - 1) + s[i]) / period`.
///
/// Undefined entries are dropped from the seed window (an all-undefined
/// window leaves the state unset), and an undefined input emits `None`
/// while carrying the running state, the same rule the EMA uses. The DX
/// series this smooths always has an undefined head, so the seed tolerance
/// is what lets the ADX chain produce a value at all.
pub fn wilders_smooth(values: &[Option<f64>], period: usize) -> DerivedSeries {
    let m = values.len();
    let mut out = vec![None; m];

    if period == 0 || m < period {
        return out;
    }

    let mut prev: Option<f64> = None;

    for i in (period - 1)..m {
        if i + 1 == period {
            prev = mean_of_defined(&values[..=i]);
            out[i] = prev;
        } else if let (Some(state), Some(value)) = (prev, values[i]) {
            let next = (state * (period as f64 - 1.0) + value) / period as f64;
            prev = Some(next);
            out[i] = Some(next);
        }
    }

    out
}

/// Calculate the Average Directional Index summary
///
/// # Arguments
/// * `highs`, `lows`, `closes` - Raw bar columns, index-aligned
/// * `period` - Smoothing period (typically 14)
///
/// # Returns
/// `AdxSummary` with the newest ADX value. Needs at least `period + 1` bars;
/// anything shorter reports every field undefined.
///
/// The DI fields are read at index `last + period - 1` of the DI series,
/// bounds-checked. For any `period > 1` that index is past the end of the
/// series, so the DI summary fields come back undefined.
pub fn calculate_adx(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> AdxSummary {
    let n = highs.len();
    if period == 0 || n < period + 1 {
        return AdxSummary::default();
    }

    // per-pair true range and directional movement, length n - 1
    let mut true_range: DerivedSeries = Vec::with_capacity(n - 1);
    let mut plus_dm: DerivedSeries = Vec::with_capacity(n - 1);
    let mut minus_dm: DerivedSeries = Vec::with_capacity(n - 1);

    for i in 1..n {
        let high_diff = highs[i] - highs[i - 1];
        let low_diff = lows[i - 1] - lows[i];

        plus_dm.push(Some(if high_diff > low_diff {
            high_diff.max(0.0)
        } else {
            0.0
        }));
        minus_dm.push(Some(if low_diff > high_diff {
            low_diff.max(0.0)
        } else {
            0.0
        }));

        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        true_range.push(Some(hl.max(hc).max(lc)));
    }

    let smooth_tr = wilders_smooth(&true_range, period);
    let smooth_pdm = wilders_smooth(&plus_dm, period);
    let smooth_mdm = wilders_smooth(&minus_dm, period);

    let m = smooth_tr.len();
    let mut plus_di: DerivedSeries = vec![None; m];
    let mut minus_di: DerivedSeries = vec![None; m];
    let mut dx: DerivedSeries = vec![None; m];

    for i in 0..m {
        let tr = match smooth_tr[i] {
            Some(tr) if tr != 0.0 => tr,
            _ => continue,
        };
        plus_di[i] = smooth_pdm[i].map(|dm| dm / tr * 100.0);
        minus_di[i] = smooth_mdm[i].map(|dm| dm / tr * 100.0);
        dx[i] = plus_di[i].zip(minus_di[i]).map(|(p, m)| {
            let sum = p + m;
            if sum == 0.0 {
                0.0
            } else {
                (p - m).abs() / sum * 100.0
            }
        });
    }

    let adx_series = wilders_smooth(&dx, period);
    let last = adx_series.len() - 1;
    let di_idx = last + period - 1;

    AdxSummary {
        adx: adx_series[last],
        plus_di: plus_di.get(di_idx).copied().flatten(),
        minus_di: minus_di.get(di_idx).copied().flatten(),
    }
}
