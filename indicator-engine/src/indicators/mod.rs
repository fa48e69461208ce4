pub mod adx;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod sma;

pub use adx::{calculate_adx, wilders_smooth, AdxSummary};
pub use bollinger::{calculate_bollinger_bands, BollingerBands};
pub use ema::calculate_ema;
pub use macd::calculate_macd;
pub use sma::calculate_sma;

/// A series derived from the input bars: one optional value per input index,
/// `None` where the lookback (or a gap in an upstream series) leaves the
/// value undefined.
pub type DerivedSeries = Vec<Option<f64>>;

/// Mean of the defined entries of a window, `None` when none are defined.
///
/// Window-based indicators tolerate partially defined windows instead of
/// requiring every entry; an all-undefined window stays undefined.
pub(crate) fn mean_of_defined(window: &[Option<f64>]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in window.iter().flatten() {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
