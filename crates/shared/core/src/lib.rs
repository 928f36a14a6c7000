//! Tally Core Domain
//!
//! Pure domain types shared by the Tally reports.
//! This crate contains no I/O and is 100% unit testable.

pub mod dataset;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use dataset::Dataset;
pub use entities::{SaleRecord, StockRecord};
pub use values::{Money, Price, StockLevel, Timestamp, Units, fixed_2dp};
