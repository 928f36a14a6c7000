//! Sales Total Aggregator

use log::debug;
use rust_decimal::Decimal;
use tally_core::{Dataset, Money, SaleRecord};
use tally_ports::LineSink;

use crate::error::{Error, Result};

/// `unit_price * quantity` for one record
pub fn line_total(record: &SaleRecord) -> Result<Money> {
    record
        .line_total()
        .ok_or_else(|| Error::Overflow(record.name.clone()))
}

/// Sum of `unit_price * quantity` over the dataset. Zero when empty.
pub fn total_sales(sales: &Dataset<SaleRecord>) -> Result<Money> {
    sales.iter().try_fold(Decimal::ZERO, |total, record| {
        total
            .checked_add(line_total(record)?)
            .ok_or_else(|| Error::Overflow(record.name.clone()))
    })
}

/// Compute the total and print it with a currency prefix.
///
/// No decimal places are enforced; the amount prints at its natural scale.
pub fn report_total_sales(sales: &Dataset<SaleRecord>, sink: &mut impl LineSink) -> Result<Money> {
    let total = total_sales(sales)?;
    debug!("Total sales over {} records: {}", sales.len(), total);
    sink.write_line(&format!("Total sales amount: ${}", total))?;
    Ok(total)
}
