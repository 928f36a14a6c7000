use serde::{Deserialize, Serialize};

use crate::values::StockLevel;

/// Stock on hand for one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Product name
    #[serde(alias = "product")]
    pub name: String,
    pub stock: StockLevel,
}

impl StockRecord {
    pub fn new(name: impl Into<String>, stock: StockLevel) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product_alias() {
        let record: StockRecord =
            serde_json::from_str(r#"{"product": "Laptop", "stock": 5}"#).unwrap();
        assert_eq!(record, StockRecord::new("Laptop", 5));
    }
}
