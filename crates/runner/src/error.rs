use tally_interest::InterestError;
use tally_ports::SinkError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Stock report failed: {0}")]
    Inventory(#[from] tally_inventory::Error),

    #[error("Sales report failed: {0}")]
    Sales(#[from] tally_sales::Error),

    #[error("Interest calculator: {0}")]
    Interest(#[from] InterestError),

    #[error("Output error: {0}")]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
