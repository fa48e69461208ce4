use common::Snapshot;

use crate::indicators::{AdxSummary, BollingerBands, DerivedSeries};
use crate::series::SeriesStore;

/// Signed percentage change of `a` relative to `b`
///
/// Undefined when either side is undefined or the base is zero; a bad
/// denominator degrades to `None` for this one metric, never to an error.
pub fn percent_change(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) if b != 0.0 => Some((a - b) / b * 100.0),
        _ => None,
    }
}

/// Build the reporting row from the newest index of every derived series.
///
/// The reference price sits `change_lookback` periods before the newest
/// index, clamped to the start of the series. Values are copied at full
/// precision; `Snapshot::to_row` rounds for presentation.
#[allow(clippy::too_many_arguments)]
pub fn assemble_snapshot(
    store: &SeriesStore<'_>,
    dma_short: &DerivedSeries,
    dma_long: &DerivedSeries,
    macd_line: &DerivedSeries,
    macd_signal: &DerivedSeries,
    macd_histogram: &DerivedSeries,
    bb: &BollingerBands,
    adx: &AdxSummary,
    change_lookback: usize,
) -> Snapshot {
    let i = store.len() - 1;
    let i_ref = i.saturating_sub(change_lookback);

    let price = Some(store.bar(i).close);
    let ref_price = Some(store.bar(i_ref).close);

    Snapshot {
        price,
        ref_price,
        dma_short: dma_short[i],
        dma_long: dma_long[i],
        price_vs_ref_pct: percent_change(price, ref_price),
        price_vs_dma_short_pct: percent_change(price, dma_short[i]),
        price_vs_dma_long_pct: percent_change(price, dma_long[i]),
        dma_short_vs_long_pct: percent_change(dma_short[i], dma_long[i]),
        macd_line: macd_line[i],
        macd_signal: macd_signal[i],
        macd_histogram: macd_histogram[i],
        bb_upper: bb.upper[i],
        bb_middle: bb.middle[i],
        bb_lower: bb.lower[i],
        adx: adx.adx,
        plus_di: adx.plus_di,
        minus_di: adx.minus_di,
    }
}
