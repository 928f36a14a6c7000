//! Receipt Generator
//!
//! Layout:
//!
//! ```text
//! Order Receipt
//! --------------------------------
//! apple - $1.00 x 10 = $10.00
//! --------------------------------
//! Grand Total: $10.00
//! --------------------------------
//! ```

use log::{debug, info};
use rust_decimal::Decimal;
use tally_core::{Dataset, Money, Price, SaleRecord, Units, fixed_2dp};
use tally_ports::LineSink;

use crate::error::{Error, Result};
use crate::total::line_total;

pub const HEADER: &str = "Order Receipt";
pub const SEPARATOR: &str = "--------------------------------";

/// One priced line of the receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub name: String,
    pub unit_price: Price,
    pub quantity: Units,
    pub line_total: Money,
}

impl ReceiptLine {
    fn from_record(record: &SaleRecord) -> Result<Self> {
        Ok(Self {
            name: record.name.clone(),
            unit_price: record.unit_price,
            quantity: record.quantity,
            line_total: line_total(record)?,
        })
    }

    /// `name - $price x qty = $total`, both amounts at 2 decimal places
    pub fn render(&self) -> String {
        format!(
            "{} - ${} x {} = ${}",
            self.name,
            fixed_2dp(self.unit_price),
            self.quantity,
            fixed_2dp(self.line_total)
        )
    }
}

/// A priced receipt for a set of orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub grand_total: Money,
}

impl Receipt {
    /// Price every order, accumulating the grand total in input order
    pub fn from_orders(orders: &Dataset<SaleRecord>) -> Result<Self> {
        let mut grand_total = Decimal::ZERO;
        let mut lines = Vec::with_capacity(orders.len());

        for record in orders {
            let line = ReceiptLine::from_record(record)?;
            grand_total = grand_total
                .checked_add(line.line_total)
                .ok_or_else(|| Error::Overflow(line.name.clone()))?;
            debug!(
                "Receipt line {}: {} -> running total {}",
                line.name, line.line_total, grand_total
            );
            lines.push(line);
        }

        Ok(Self { lines, grand_total })
    }

    /// Every output line, header to trailing separator
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 5);
        out.push(HEADER.to_string());
        out.push(SEPARATOR.to_string());
        out.extend(self.lines.iter().map(ReceiptLine::render));
        out.push(SEPARATOR.to_string());
        out.push(format!("Grand Total: ${}", fixed_2dp(self.grand_total)));
        out.push(SEPARATOR.to_string());
        out
    }
}

/// Build the receipt for `orders` and write it to `sink`
pub fn generate_order_receipt(
    orders: &Dataset<SaleRecord>,
    sink: &mut impl LineSink,
) -> Result<Receipt> {
    let receipt = Receipt::from_orders(orders)?;
    for line in receipt.render() {
        sink.write_line(&line)?;
    }
    info!(
        "Receipt generated: {} lines, grand total {}",
        receipt.lines.len(),
        receipt.grand_total
    );
    Ok(receipt)
}
