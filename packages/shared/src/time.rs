//! Time-related utilities with clock abstraction for testability.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Format used by the chat service for the `num` field of a fetch request.
pub const FETCH_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current wall-clock time in the local timezone
    fn now_local(&self) -> NaiveDateTime;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: NaiveDateTime,
}

impl FixedClock {
    /// Create a new fixed clock with the given local time
    pub fn new(fixed_time: NaiveDateTime) -> Self {
        Self { fixed_time }
    }

    /// Create a fixed clock from calendar components.
    ///
    /// Returns `None` when the components do not form a valid date and time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> NaiveDateTime {
        self.fixed_time
    }
}

/// Format a local time as `YYYYMMDDHHMMSS`
pub fn format_fetch_timestamp(time: NaiveDateTime) -> String {
    time.format(FETCH_TIMESTAMP_FORMAT).to_string()
}

/// Current local time as `YYYYMMDDHHMMSS`, read from the given clock
pub fn fetch_timestamp(clock: &dyn Clock) -> String {
    format_fetch_timestamp(clock.now_local())
}
