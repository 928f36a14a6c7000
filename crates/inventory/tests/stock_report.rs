//! Stock report integration test
//!
//! Runs the classifier over the catalogue used by the binary and over
//! edge-case datasets, checking the text written to the sink.

use tally_core::{Dataset, StockRecord};
use tally_inventory::{Error, StockStatus, check_stock_levels, classify};
use tally_ports::{LineSink, SinkError, SinkResult};

/// Accepts `capacity` lines, then reports itself closed
struct ClosingSink {
    capacity: usize,
    written: Vec<String>,
    attempts: usize,
}

impl ClosingSink {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            written: Vec::new(),
            attempts: 0,
        }
    }
}

impl LineSink for ClosingSink {
    fn write_line(&mut self, line: &str) -> SinkResult<()> {
        self.attempts += 1;
        if self.written.len() == self.capacity {
            return Err(SinkError::Closed);
        }
        self.written.push(line.to_string());
        Ok(())
    }
}

fn catalogue() -> Dataset<StockRecord> {
    Dataset::new(vec![
        StockRecord::new("Laptop", 5),
        StockRecord::new("Headphones", 0),
        StockRecord::new("Smartphone", 3),
    ])
}

#[test]
fn test_catalogue_report() {
    let _ = env_logger::try_init();

    let mut out: Vec<String> = Vec::new();
    check_stock_levels(&catalogue(), &mut out).expect("vec sink never fails");

    assert_eq!(
        out,
        vec![
            "Laptop is In Stock.",
            "Headphones is Out of Stock.",
            "Smartphone is In Stock.",
        ]
    );
}

#[test]
fn test_one_line_per_record_in_order() {
    let products: Dataset<StockRecord> = (-3..7)
        .map(|level| StockRecord::new(format!("item-{level}"), level))
        .collect();

    let lines = classify(&products);
    assert_eq!(lines.len(), products.len());

    for (record, line) in products.iter().zip(&lines) {
        assert_eq!(line.name, record.name);
        let out_of_stock = line.to_string().ends_with("is Out of Stock.");
        assert_eq!(out_of_stock, record.stock <= 0, "{}", record.name);
        assert_eq!(line.status == StockStatus::OutOfStock, record.stock <= 0);
    }
}

#[test]
fn test_negative_stock_is_accepted() {
    let products = Dataset::new(vec![StockRecord::new("Returned", -2)]);
    let mut out: Vec<String> = Vec::new();
    check_stock_levels(&products, &mut out).unwrap();
    assert_eq!(out, vec!["Returned is Out of Stock."]);
}

#[test]
fn test_sink_failure_stops_the_report() {
    let mut sink = ClosingSink::new(1);
    let err = check_stock_levels(&catalogue(), &mut sink).unwrap_err();

    assert!(matches!(err, Error::Sink(SinkError::Closed)));
    assert_eq!(sink.written, vec!["Laptop is In Stock."]);
    // No further writes after the first failure
    assert_eq!(sink.attempts, 2);
}
