use super::DerivedSeries;

/// Calculate Simple Moving Average
///
/// # Arguments
/// * `values` - Derived series to average (raw bar columns are fully defined)
/// * `period` - SMA lookback
///
/// # Returns
/// Derived series of the same length, `None` before `period - 1` values are
/// available. Undefined entries inside a window are skipped, so a partially
/// defined window still yields a value; an all-undefined window yields `None`.
pub fn calculate_sma(values: &[Option<f64>], period: usize) -> DerivedSeries {
    let n = values.len();
    let mut sma = vec![None; n];

    if period == 0 || n < period {
        return sma;
    }

    // Running sum and count of the defined entries in the current window
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values[..period].iter().flatten() {
        sum += value;
        count += 1;
    }
    sma[period - 1] = if count > 0 { Some(sum / count as f64) } else { None };

    // Sliding window for subsequent values
    for i in period..n {
        if let Some(old) = values[i - period] {
            sum -= old;
            count -= 1;
        }
        if let Some(new) = values[i] {
            sum += new;
            count += 1;
        }
        sma[i] = if count > 0 { Some(sum / count as f64) } else { None };
    }

    sma
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defined(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_sma_basic() {
        let prices = defined(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let sma = calculate_sma(&prices, 3);

        assert_eq!(sma.len(), prices.len());
        assert!(sma[0].is_none());
        assert!(sma[1].is_none());
        assert_eq!(sma[2], Some(2.0)); // (1+2+3)/3
        assert_eq!(sma[3], Some(3.0)); // (2+3+4)/3
        assert_eq!(sma[9], Some(9.0)); // (8+9+10)/3
    }

    #[test]
    fn test_sma_period_larger_than_data() {
        let prices = defined(&[1.0, 2.0, 3.0]);
        let sma = calculate_sma(&prices, 5);

        assert!(sma.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_sma_skips_undefined_entries() {
        let prices = vec![Some(1.0), None, Some(3.0), Some(5.0)];
        let sma = calculate_sma(&prices, 3);

        assert_eq!(sma[2], Some(2.0)); // mean of 1, 3
        assert_eq!(sma[3], Some(4.0)); // mean of 3, 5
    }

    #[test]
    fn test_sma_window_slides_past_gaps() {
        // undefined entries enter and leave the window without disturbing
        // the running sum over the defined ones
        let prices = vec![Some(2.0), None, Some(4.0), Some(6.0), None, Some(8.0)];
        let sma = calculate_sma(&prices, 3);

        assert_eq!(sma[2], Some(3.0)); // mean of 2, 4
        assert_eq!(sma[3], Some(5.0)); // mean of 4, 6
        assert_eq!(sma[4], Some(5.0)); // mean of 4, 6
        assert_eq!(sma[5], Some(7.0)); // mean of 6, 8
    }

    #[test]
    fn test_sma_all_undefined_window() {
        let prices = vec![None, None, None, Some(4.0)];
        let sma = calculate_sma(&prices, 3);

        assert!(sma[2].is_none());
        assert_eq!(sma[3], Some(4.0));
    }
}
