use super::DerivedSeries;

/// Bollinger Bands result, index-aligned with the input series
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: DerivedSeries,
    pub middle: DerivedSeries,
    pub lower: DerivedSeries,
}

/// Calculate Bollinger Bands
///
/// # Arguments
/// * `values` - Derived series (typically the close column)
/// * `period` - Window for the moving average (typically 20)
/// * `std_dev` - Number of standard deviations (typically 2.0)
///
/// # Returns
/// `BollingerBands` with upper, middle (SMA), and lower bands. Undefined
/// entries are dropped from each window; the standard deviation is the
/// population one (divisor = window size) over the remaining values.
pub fn calculate_bollinger_bands(
    values: &[Option<f64>],
    period: usize,
    std_dev: f64,
) -> BollingerBands {
    let n = values.len();
    let mut bb = BollingerBands {
        upper: vec![None; n],
        middle: vec![None; n],
        lower: vec![None; n],
    };

    if period == 0 || n < period {
        return bb;
    }

    for i in (period - 1)..n {
        let window: Vec<f64> = values[i + 1 - period..=i].iter().flatten().copied().collect();
        if window.is_empty() {
            continue;
        }

        let len = window.len() as f64;
        let mean = window.iter().sum::<f64>() / len;
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / len;
        let std = variance.sqrt();

        bb.middle[i] = Some(mean);
        bb.upper[i] = Some(mean + std * std_dev);
        bb.lower[i] = Some(mean - std * std_dev);
    }

    bb
}
