use serde::{Deserialize, Serialize};

use crate::values::{Money, Price, Units};

/// One sold or ordered line: an item, its unit price and how many units.
///
/// Shared by the sales aggregator and the receipt generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(alias = "item")]
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: Price,
    pub quantity: Units,
}

impl SaleRecord {
    pub fn new(name: impl Into<String>, unit_price: Price, quantity: Units) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price times quantity, exact. `None` if the product overflows.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(Money::from(self.quantity))
    }
}
