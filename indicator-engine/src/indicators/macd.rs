use super::{calculate_ema, DerivedSeries};

/// Calculate MACD line, signal line, and histogram
///
/// # Arguments
/// * `values` - Derived series (typically the close column)
/// * `fast`, `slow` - EMA lookbacks for the MACD line (typically 12/26)
/// * `signal` - EMA lookback for the signal line (typically 9)
///
/// # Returns
/// `(line, signal, histogram)`, all aligned with the input.
///
/// The signal line is the EMA of the MACD line fed back through
/// [`calculate_ema`] as a series in its own right. Because the line is
/// undefined until the slow EMA seeds, the signal EMA only ever seeds when
/// `slow <= signal`; with the common 12/26/9 lookbacks the signal and
/// histogram stay undefined for the whole series.
pub fn calculate_macd(
    values: &[Option<f64>],
    fast: usize,
    slow: usize,
    signal: usize,
) -> (DerivedSeries, DerivedSeries, DerivedSeries) {
    let ema_fast = calculate_ema(values, fast);
    let ema_slow = calculate_ema(values, slow);

    let line: DerivedSeries = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f.zip(*s).map(|(f, s)| f - s))
        .collect();

    let signal_line = calculate_ema(&line, signal);

    let histogram: DerivedSeries = line
        .iter()
        .zip(&signal_line)
        .map(|(l, s)| l.zip(*s).map(|(l, s)| l - s))
        .collect();

    (line, signal_line, histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defined(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_line_is_fast_minus_slow() {
        let closes = defined(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let (line, _, _) = calculate_macd(&closes, 2, 3, 9);

        // fast EMA (k=2/3): seed 1.5 at i=1, then 3*2/3 + 1.5/3 = 2.5 at i=2
        // slow EMA (k=1/2): seed 2.0 at i=2
        assert!(line[1].is_none());
        assert_relative_eq!(line[2].unwrap(), 2.5 - 2.0);
    }

    #[test]
    fn test_histogram_is_line_minus_signal() {
        let closes = defined(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let (line, signal, histogram) = calculate_macd(&closes, 2, 3, 4);

        for i in 0..closes.len() {
            match (line[i], signal[i]) {
                (Some(l), Some(s)) => {
                    assert_relative_eq!(histogram[i].unwrap(), l - s);
                }
                _ => assert!(histogram[i].is_none()),
            }
        }
        // signal seeds at index 3 from the defined tail of the line window
        assert!(signal[2].is_none());
        assert!(signal[3].is_some());
        assert!(histogram[3].is_some());
    }

    #[test]
    fn test_line_zero_on_flat_input() {
        let closes = defined(&[100.0; 30]);
        let (line, _, _) = calculate_macd(&closes, 12, 26, 9);

        assert!(line[24].is_none());
        assert_relative_eq!(line[25].unwrap(), 0.0);
        assert_relative_eq!(line[29].unwrap(), 0.0);
    }

    #[test]
    fn test_signal_undefined_when_seed_window_is_empty() {
        // with 12/26/9 the line has no defined entry before index 25, so the
        // signal EMA never seeds and the histogram never materializes
        let closes = defined(&[100.0; 40]);
        let (_, signal, histogram) = calculate_macd(&closes, 12, 26, 9);

        assert!(signal.iter().all(|v| v.is_none()));
        assert!(histogram.iter().all(|v| v.is_none()));
    }
}
