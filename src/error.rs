use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid extent: min={min}, max={max}")]
    InvalidExtent { min: f64, max: f64 },

    #[error("invalid measurements: {0}")]
    InvalidMeasurements(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("json contract error: {0}")]
    Json(#[from] serde_json::Error),
}
