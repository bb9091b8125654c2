//! Testing utilities and helpers
//!
//! - **[`time`]**: a controllable [`MockClock`] and a terse date constructor
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use hrms_common::testing::{ymd, MockClock};
//! use hrms_common::Clock;
//!
//! let clock = MockClock::new(ymd(2024, 1, 1));
//! clock.advance_days(31);
//! assert_eq!(clock.today(), ymd(2024, 2, 1));
//! # }
//! ```

pub mod time;

pub use time::{ymd, MockClock};
