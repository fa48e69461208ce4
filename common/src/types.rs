use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar data for one trading period (a day or a week)
///
/// The upstream data source guarantees that every numeric field is strictly
/// positive and that bars arrive in strictly increasing date order; the engine
/// trusts both invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Bar field a window-based indicator reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

/// One reporting row: the newest value of every indicator plus the
/// percentage-change metrics, each independently possibly undefined
/// depending on how much history was available.
///
/// Fields hold full-precision values; rounding happens only in
/// [`Snapshot::to_row`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Close at the newest index
    pub price: Option<f64>,
    /// Close `change_lookback` periods before the newest index (clamped to 0)
    pub ref_price: Option<f64>,
    pub dma_short: Option<f64>,
    pub dma_long: Option<f64>,
    pub price_vs_ref_pct: Option<f64>,
    pub price_vs_dma_short_pct: Option<f64>,
    pub price_vs_dma_long_pct: Option<f64>,
    pub dma_short_vs_long_pct: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub adx: Option<f64>,
    pub plus_di: Option<f64>,
    pub minus_di: Option<f64>,
}

impl Snapshot {
    /// Flatten into the fixed-order presentation row, rounding every value
    /// to 2 decimal places. Internal computation stays full-precision; this
    /// is the only place rounding happens.
    pub fn to_row(&self) -> Vec<Option<f64>> {
        [
            self.price,
            self.ref_price,
            self.dma_short,
            self.dma_long,
            self.price_vs_ref_pct,
            self.price_vs_dma_short_pct,
            self.price_vs_dma_long_pct,
            self.dma_short_vs_long_pct,
            self.macd_line,
            self.macd_signal,
            self.macd_histogram,
            self.bb_upper,
            self.bb_middle,
            self.bb_lower,
            self.adx,
            self.plus_di,
            self.minus_di,
        ]
        .iter()
        .map(|v| v.map(round2))
        .collect()
    }
}

/// Round to 2 decimal places for presentation
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
