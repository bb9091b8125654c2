//! Time abstraction for testability

// Test utilities panic on bad input so failing fixtures surface immediately
#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::time::Clock;

/// Build a date from literal parts, panicking on an impossible date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date in test fixture")
}

/// Mock clock for deterministic testing
///
/// Clones share the same underlying date, so a clock handed to a service can
/// still be advanced from the test body.
#[derive(Debug, Clone)]
pub struct MockClock {
    today: Arc<Mutex<NaiveDate>>,
}

impl MockClock {
    /// Create a mock clock starting at `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Arc::new(Mutex::new(today)) }
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: u64) {
        // Test utility: panic on poisoned mutex to fail tests early
        let mut today = self.today.lock().expect("mutex poisoned");
        *today = today.checked_add_days(Days::new(days)).expect("date within chrono range");
    }

    /// Jump to an absolute date
    pub fn set_today(&self, date: NaiveDate) {
        *self.today.lock().expect("mutex poisoned") = date;
    }
}

impl Clock for MockClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().expect("mutex poisoned")
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.today().and_time(NaiveTime::MIN))
    }
}
