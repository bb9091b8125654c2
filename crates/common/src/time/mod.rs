//! Calendar time abstractions
//!
//! Everything in the profile engine measures against "today". Code asks a
//! [`Clock`] for that date instead of reading the wall clock, so printouts can
//! be pinned to a date and tests stay deterministic.
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use chrono::NaiveDate;
//! use hrms_common::time::{Clock, FixedClock};
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
//! assert_eq!(clock.today().to_string(), "2024-01-31");
//! # }
//! ```

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
