//! Inventory errors

use tally_ports::SinkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write stock report: {0}")]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, Error>;
