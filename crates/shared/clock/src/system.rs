use chrono::Utc;
use tally_core::Timestamp;
use tally_ports::Clock;

/// Wall clock used by the `tally` binary.
///
/// The interest calculator reads the current calendar year from it when
/// computing the target year.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
