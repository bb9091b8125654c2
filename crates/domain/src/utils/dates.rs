//! Calendar helpers and display formatting for [`DateValue`]

use chrono::{Datelike, NaiveDate};

use crate::constants::{DISPLAY_DATE_FORMAT, NOT_AVAILABLE, PRESENT_LABEL};
use crate::types::DateValue;

/// Format a recorded date for display
///
/// - unset -> `"N/A"`
/// - open span -> `"Present"`
/// - not a date -> the raw text unchanged
/// - otherwise `DD/MM/YYYY`
pub fn format_display_date(value: &DateValue) -> String {
    match value {
        DateValue::Unset => NOT_AVAILABLE.to_string(),
        DateValue::OpenEnded => PRESENT_LABEL.to_string(),
        DateValue::Concrete(date) => format_date(*date),
        DateValue::Malformed(raw) => raw.clone(),
    }
}

/// `DD/MM/YYYY` for a concrete date
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Number of days in a given month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(30, |last| last.day())
}

/// Year and month immediately before the given one
pub const fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The calendar day before `date`, if representable
pub fn day_before(date: NaiveDate) -> Option<NaiveDate> {
    date.pred_opt()
}
