//! Tally Inventory - Stock Status Classifier
//!
//! Classifies each product of a stock dataset with a binary threshold at
//! zero and presents one line per product, in input order:
//!
//! ```text
//! Laptop is In Stock.
//! Headphones is Out of Stock.
//! ```

pub mod classifier;
pub mod error;

pub use classifier::{StockLine, StockStatus, check_stock_levels, classify};
pub use error::{Error, Result};
