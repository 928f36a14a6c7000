//! Tally Clock Infrastructure
//!
//! Time sources for the interest calculator's target-year computation:
//!
//! - [`SystemClock`]: wall-clock time for the binary
//! - [`FixedClock`]: frozen time for deterministic tests
//!
//! ## Usage
//!
//! ```
//! use tally_clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::at_year(2026).unwrap();
//! assert_eq!(clock.current_year(), 2026);
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tally_ports::Clock;
