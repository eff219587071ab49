use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid bar render context: bar index {bar_index} out of range for {bars_count} bars")]
    BarIndexOutOfRange { bar_index: usize, bars_count: usize },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
