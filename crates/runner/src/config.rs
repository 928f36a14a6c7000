//! Configuration loading for the runner
//!
//! A JSON file may replace any of the three datasets; sections left out
//! keep the built-in catalogue:
//!
//! ```json
//! {
//!   "products": [{ "name": "Laptop", "stock": 5 }],
//!   "orders": [{ "name": "apple", "unit_price": "1.00", "quantity": 10 }]
//! }
//! ```

use std::path::Path;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tally_core::{Dataset, SaleRecord, StockRecord};
use thiserror::Error;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Input of the stock classifier
    #[serde(default = "default_products")]
    pub products: Dataset<StockRecord>,

    /// Input of the sales total
    #[serde(default = "default_sales")]
    pub sales: Dataset<SaleRecord>,

    /// Input of the order receipt
    #[serde(default = "default_sales")]
    pub orders: Dataset<SaleRecord>,
}

fn default_products() -> Dataset<StockRecord> {
    Dataset::new(vec![
        StockRecord::new("Laptop", 5),
        StockRecord::new("Headphones", 0),
        StockRecord::new("Smartphone", 3),
    ])
}

fn default_sales() -> Dataset<SaleRecord> {
    Dataset::new(vec![
        SaleRecord::new("apple", dec!(1.00), 10),
        SaleRecord::new("banana", dec!(0.50), 20),
        SaleRecord::new("cherry", dec!(0.25), 30),
    ])
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
            sales: default_sales(),
            orders: default_sales(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Invalid configuration: {0}")]
    Parse(String),
}
