use thiserror::Error;
use tracing_subscriber::filter::ParseError;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config json: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid logging.filter {filter:?}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
}
