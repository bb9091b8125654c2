//! Application constants
//!
//! Centralized location for display strings and calendar constants used by
//! the profile engine.

// Date sentinels and display text
pub const EMPTY_DATE_SENTINEL: &str = "0000-00-00";
pub const OPEN_SPAN_TOKEN: &str = "present";
pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";
pub const PRESENT_LABEL: &str = "Present";
pub const ZERO_DURATION: &str = "0 Days";
pub const RANGE_SEPARATOR: &str = " \u{2014} ";

// Date formats
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// Average calendar lengths for aggregated service totals
pub const AVERAGE_DAYS_PER_YEAR: f64 = 365.25;
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.4375;
pub const DAYS_CARRIED_TO_MONTH: i64 = 30;
pub const MONTHS_PER_YEAR: i64 = 12;

// Empty-state messages
pub const NO_LEAVES_MESSAGE: &str = "No leave records";
pub const NO_DISCIPLINARY_MESSAGE: &str = "No disciplinary actions";
pub const NO_DOCUMENTS_MESSAGE: &str = "No documents uploaded";
pub const NO_HISTORY_MESSAGE: &str = "No employment history";
pub const NO_FINANCIAL_RECORDS_MESSAGE: &str = "No records found";

// Money display
pub const CURRENCY_PREFIX: &str = "Rs.";
