use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Lookbacks for one engine run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorParameters {
    // Moving averages
    pub dma_short_period: usize,
    pub dma_long_period: usize,
    /// How many periods back the reference price for the short-horizon
    /// percentage change is taken
    pub change_lookback: usize,
    // MACD
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,
    // Bollinger Bands
    pub bb_period: usize,
    pub bb_std_dev: f64,
    // ADX
    pub adx_period: usize,
}

impl Default for IndicatorParameters {
    fn default() -> Self {
        Self {
            dma_short_period: 50,
            dma_long_period: 200,
            change_lookback: 10,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
            adx_period: 14,
        }
    }
}

impl IndicatorParameters {
    pub fn with_dma_periods(mut self, short: usize, long: usize) -> Self {
        self.dma_short_period = short;
        self.dma_long_period = long;
        self
    }

    pub fn with_change_lookback(mut self, lookback: usize) -> Self {
        self.change_lookback = lookback;
        self
    }

    pub fn with_macd_periods(mut self, fast: usize, slow: usize, signal: usize) -> Self {
        self.macd_fast_period = fast;
        self.macd_slow_period = slow;
        self.macd_signal_period = signal;
        self
    }

    pub fn with_bollinger(mut self, period: usize, std_dev: f64) -> Self {
        self.bb_period = period;
        self.bb_std_dev = std_dev;
        self
    }

    pub fn with_adx_period(mut self, period: usize) -> Self {
        self.adx_period = period;
        self
    }

    /// Reject lookbacks no indicator can work with
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("dma_short_period", self.dma_short_period),
            ("dma_long_period", self.dma_long_period),
            ("macd_fast_period", self.macd_fast_period),
            ("macd_slow_period", self.macd_slow_period),
            ("macd_signal_period", self.macd_signal_period),
            ("bb_period", self.bb_period),
            ("adx_period", self.adx_period),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(IndicatorError::InvalidParameter(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        if self.bb_std_dev <= 0.0 {
            return Err(IndicatorError::InvalidParameter(
                "bb_std_dev must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = IndicatorParameters::default();
        assert_eq!(params.dma_short_period, 50);
        assert_eq!(params.dma_long_period, 200);
        assert_eq!(params.change_lookback, 10);
        assert_eq!(params.macd_fast_period, 12);
        assert_eq!(params.macd_slow_period, 26);
        assert_eq!(params.macd_signal_period, 9);
        assert_eq!(params.bb_period, 20);
        assert_eq!(params.bb_std_dev, 2.0);
        assert_eq!(params.adx_period, 14);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let params = IndicatorParameters::default()
            .with_dma_periods(10, 30)
            .with_bollinger(10, 1.5)
            .with_adx_period(7);
        assert_eq!(params.dma_short_period, 10);
        assert_eq!(params.dma_long_period, 30);
        assert_eq!(params.bb_period, 10);
        assert_eq!(params.bb_std_dev, 1.5);
        assert_eq!(params.adx_period, 7);
    }

    #[test]
    fn test_zero_period_rejected() {
        let params = IndicatorParameters::default().with_adx_period(0);
        assert!(params.validate().is_err());
    }
}
