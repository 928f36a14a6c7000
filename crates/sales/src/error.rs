//! Sales report errors

use tally_ports::SinkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write sales report: {0}")]
    Sink(#[from] SinkError),

    #[error("Arithmetic overflow pricing '{0}'")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, Error>;
