use chrono::Datelike;
use tally_core::Timestamp;

/// Port for time abstraction
///
/// This allows the reports to use different time sources:
/// - Real system time for production
/// - Fixed time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Calendar year of `now()`
    fn current_year(&self) -> i32 {
        self.now().year()
    }

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
