use thiserror::Error;

/// Errors raised while presenting report output
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink closed")]
    Closed,
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;
