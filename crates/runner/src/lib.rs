//! Tally Runner
//!
//! Wires the reports to their datasets and sinks:
//!
//! - **Config**: datasets loaded from JSON, defaulting to the built-in catalogue
//! - **Cli**: argument parsing for the `tally` binary
//! - **App**: runs one command against a clock and a line sink
//! - **Console**: `LineSink` over any `std::io::Write`
//!
//! ```text
//!   Cli ──► Command ──┐
//!                     ├──► app::run ──► inventory / sales / interest ──► LineSink
//!   RunnerConfig ─────┘
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;

// Re-export main types
pub use app::{Outcome, run};
pub use cli::{Cli, Command, HELP};
pub use config::{ConfigError, RunnerConfig};
pub use console::ConsoleSink;
pub use error::{Result, RunnerError};
