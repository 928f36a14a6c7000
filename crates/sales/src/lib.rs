//! Tally Sales - Sales Total Aggregator and Receipt Generator
//!
//! Both reports read a dataset of [`SaleRecord`](tally_core::SaleRecord)s:
//!
//! - **Total**: a single scalar, `sum(unit_price * quantity)`
//! - **Receipt**: header, one line per order, separator, grand total
//!
//! All money is `Decimal`, so totals are exact: the grand total of a receipt
//! is always the sum of its line totals.

pub mod error;
pub mod receipt;
pub mod total;

pub use error::{Error, Result};
pub use receipt::{Receipt, ReceiptLine, SEPARATOR, generate_order_receipt};
pub use total::{line_total, report_total_sales, total_sales};
