use common::{Bar, PriceField};

use crate::indicators::DerivedSeries;

/// Immutable, index-addressed view over a validated OHLCV series.
///
/// Index 0 is the oldest bar, index `len() - 1` the newest. Every derived
/// series the indicators produce is aligned index-for-index with this store,
/// so offset arithmetic (`i - 10`, `last + period - 1`) stays exact.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStore<'a> {
    bars: &'a [Bar],
}

impl<'a> SeriesStore<'a> {
    pub fn new(bars: &'a [Bar]) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bar(&self, idx: usize) -> &Bar {
        &self.bars[idx]
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Extract one bar field as a derived series (always fully defined for
    /// raw bars; the option layer exists so derived series can be fed back
    /// through the same indicator functions)
    pub fn column(&self, field: PriceField) -> DerivedSeries {
        self.bars
            .iter()
            .map(|bar| {
                Some(match field {
                    PriceField::Open => bar.open,
                    PriceField::High => bar.high,
                    PriceField::Low => bar.low,
                    PriceField::Close => bar.close,
                    PriceField::Volume => bar.volume,
                })
            })
            .collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.low).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }
}
