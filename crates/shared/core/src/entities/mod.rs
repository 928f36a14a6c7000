mod sale;
mod stock;

pub use sale::SaleRecord;
pub use stock::StockRecord;
