use common::{Bar, IndicatorError, IndicatorParameters, PriceField, Result, Snapshot};

use crate::indicators::{calculate_adx, calculate_bollinger_bands, calculate_macd, calculate_sma};
use crate::series::SeriesStore;
use crate::snapshot::assemble_snapshot;

/// One-shot batch transform: validated OHLCV series in, indicator snapshot out.
///
/// Every run is a pure function of the input series and the configured
/// lookbacks; the engine holds no state between runs.
pub struct IndicatorEngine {
    params: IndicatorParameters,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParameters) -> Self {
        Self { params }
    }

    pub fn with_defaults() -> Self {
        Self::new(IndicatorParameters::default())
    }

    pub fn params(&self) -> &IndicatorParameters {
        &self.params
    }

    /// Compute every indicator series over `bars` and assemble the snapshot
    /// row for the newest index.
    ///
    /// An empty series is the only whole-call failure; a series too short
    /// for some lookback simply leaves the affected fields undefined.
    pub fn run(&self, bars: &[Bar]) -> Result<Snapshot> {
        self.params.validate()?;
        if bars.is_empty() {
            return Err(IndicatorError::NoData);
        }

        let store = SeriesStore::new(bars);
        let n = store.len();
        let closes = store.column(PriceField::Close);

        // clamp the DMA lookbacks so a short series still has a defined
        // average at its newest index
        let dma_short = calculate_sma(&closes, self.params.dma_short_period.min(n));
        let dma_long = calculate_sma(&closes, self.params.dma_long_period.min(n));

        let (macd_line, macd_signal, macd_histogram) = calculate_macd(
            &closes,
            self.params.macd_fast_period,
            self.params.macd_slow_period,
            self.params.macd_signal_period,
        );

        let bb = calculate_bollinger_bands(&closes, self.params.bb_period, self.params.bb_std_dev);

        let adx = calculate_adx(
            &store.highs(),
            &store.lows(),
            &store.closes(),
            self.params.adx_period,
        );

        Ok(assemble_snapshot(
            &store,
            &dma_short,
            &dma_long,
            &macd_line,
            &macd_signal,
            &macd_histogram,
            &bb,
            &adx,
            self.params.change_lookback,
        ))
    }
}
