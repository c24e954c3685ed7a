use chrono::{Local, NaiveDate};

/// Source of "today" and creation timestamps
pub trait Clock {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock in the device's local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}
