pub mod config;
pub mod error;
pub mod types;

pub use config::IndicatorParameters;
pub use error::{IndicatorError, Result};
pub use types::*;
