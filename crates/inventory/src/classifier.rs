use std::fmt;

use log::{debug, info};
use tally_core::{Dataset, StockLevel, StockRecord};
use tally_ports::LineSink;

use crate::error::Result;

/// Availability of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// In stock iff the level is strictly positive; zero and negative
    /// levels are out of stock.
    pub fn of(stock: StockLevel) -> Self {
        if stock > 0 {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a single product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub name: String,
    pub status: StockStatus,
}

impl fmt::Display for StockLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}.", self.name, self.status)
    }
}

/// Classify every record, preserving input order
pub fn classify(products: &Dataset<StockRecord>) -> Vec<StockLine> {
    products
        .iter()
        .map(|record| {
            let status = StockStatus::of(record.stock);
            debug!("{}: stock={} -> {:?}", record.name, record.stock, status);
            StockLine {
                name: record.name.clone(),
                status,
            }
        })
        .collect()
}

/// Classify the dataset and write one line per product to `sink`
pub fn check_stock_levels(
    products: &Dataset<StockRecord>,
    sink: &mut impl LineSink,
) -> Result<Vec<StockLine>> {
    let lines = classify(products);
    for line in &lines {
        sink.write_line(&line.to_string())?;
    }

    let in_stock = lines
        .iter()
        .filter(|l| l.status == StockStatus::InStock)
        .count();
    info!(
        "Stock check: {} products, {} in stock, {} out of stock",
        lines.len(),
        in_stock,
        lines.len() - in_stock
    );
    Ok(lines)
}
