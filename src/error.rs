use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid container size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to load data from `{url}`: {reason}")]
    DataLoad { url: String, reason: String },

    #[error("render backend error: {0}")]
    Render(String),
}
