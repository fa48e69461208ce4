pub mod data;
pub mod engine;
pub mod indicators;
pub mod series;
pub mod snapshot;

pub use data::{generate_flat_bars, generate_synthetic_bars, generate_uptrend_bars};
pub use engine::IndicatorEngine;
pub use series::SeriesStore;
pub use snapshot::{assemble_snapshot, percent_change};

// Re-export common types
pub use common::{Bar, IndicatorError, IndicatorParameters, PriceField, Result, Snapshot};
