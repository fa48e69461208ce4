pub mod synthetic;

pub use synthetic::{generate_flat_bars, generate_synthetic_bars, generate_uptrend_bars};
