use chrono::{TimeZone, Utc};
use tally_core::Timestamp;
use tally_ports::Clock;

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }

    /// Midnight UTC on January 1st of `year`, `None` outside chrono's range
    pub fn at_year(year: i32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
