//! Clock implementations

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Current date in the local calendar
    fn today(&self) -> NaiveDate;

    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Real system clock
///
/// Uses the local time zone to decide which calendar day it is, which is what
/// staff reading a profile expect to see.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single date
///
/// Used for reproducible printouts ("as of" a given date) and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Create a clock that always reports `date`
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The pinned date
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    /// Midnight UTC of the pinned date
    fn now_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::MIN))
    }
}
