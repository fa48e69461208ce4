use super::{mean_of_defined, DerivedSeries};

/// Calculate Exponential Moving Average with an SMA-seeded start,
/// smoothing constant `k = 2 / (period + 1)`.
///
/// The seed at index `period - 1` is the mean of the defined values over
/// `[0, period - 1]`; if none are defined the seed (and every later output)
/// stays undefined, because the recurrence has no state to start from.
///
/// An undefined current value produces an undefined output but leaves the
/// running state untouched, so the recurrence resumes from the last valid
/// state once defined values reappear. The emitted series and the internal
/// state therefore diverge across undefined stretches; that asymmetry is
/// intentional and relied upon by MACD.
pub fn calculate_ema(values: &[Option<f64>], period: usize) -> DerivedSeries {
    let n = values.len();
    let mut ema = vec![None; n];

    if period == 0 || n < period {
        return ema;
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut prev: Option<f64> = None;

    for i in (period - 1)..n {
        if i + 1 == period {
            prev = mean_of_defined(&values[..=i]);
            ema[i] = prev;
        } else if let (Some(current), Some(state)) = (values[i], prev) {
            let next = current * k + state * (1.0 - k);
            prev = Some(next);
            ema[i] = Some(next);
        }
    }

    ema
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defined(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_ema_seed_is_sma() {
        let prices = defined(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let ema = calculate_ema(&prices, 3);

        assert_eq!(ema.len(), prices.len());
        assert!(ema[1].is_none());
        assert_eq!(ema[2], Some(2.0)); // (1+2+3)/3
    }

    #[test]
    fn test_ema_recurrence() {
        // period 3 => k = 0.5
        let prices = defined(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let ema = calculate_ema(&prices, 3);

        assert_relative_eq!(ema[3].unwrap(), 4.0 * 0.5 + 2.0 * 0.5);
        assert_relative_eq!(ema[4].unwrap(), 5.0 * 0.5 + 3.0 * 0.5);
    }

    #[test]
    fn test_ema_series_shorter_than_period() {
        let prices = defined(&[1.0, 2.0]);
        let ema = calculate_ema(&prices, 3);

        assert!(ema.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_ema_state_carries_over_gaps() {
        let prices = vec![Some(1.0), Some(2.0), Some(3.0), None, Some(5.0)];
        let ema = calculate_ema(&prices, 3);

        assert_eq!(ema[2], Some(2.0));
        assert!(ema[3].is_none());
        // resumes from the state at index 2, skipping the gap
        assert_relative_eq!(ema[4].unwrap(), 5.0 * 0.5 + 2.0 * 0.5);
    }

    #[test]
    fn test_ema_seed_window_skips_undefined() {
        let prices = vec![None, Some(2.0), Some(4.0), Some(6.0)];
        let ema = calculate_ema(&prices, 3);

        assert_eq!(ema[2], Some(3.0)); // mean of 2, 4
    }

    #[test]
    fn test_ema_never_starts_without_a_seed() {
        // all seed-window entries undefined: the state stays empty and a
        // later defined value cannot restart the recurrence
        let prices = vec![None, None, None, Some(4.0), Some(5.0)];
        let ema = calculate_ema(&prices, 3);

        assert!(ema.iter().all(|v| v.is_none()));
    }
}
