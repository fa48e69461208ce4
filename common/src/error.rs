use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("No data: input series is empty")]
    NoData,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
