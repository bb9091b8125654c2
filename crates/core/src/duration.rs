//! Service duration math
//!
//! Two separate algorithms live here:
//!
//! - [`calculate_detailed_duration`] measures one interval with exact
//!   calendar arithmetic (years, then months, then days with borrowing).
//! - [`calculate_total_in_service_duration`] sums exact inclusive day counts
//!   over many disjoint intervals and only then converts the total using
//!   average year and month lengths, because the sum no longer corresponds to
//!   a real calendar interval.
//!
//! Both count endpoints inclusively: a posting from 1 Jan to 1 Jan is one day.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use hrms_domain::constants::{
    AVERAGE_DAYS_PER_MONTH, AVERAGE_DAYS_PER_YEAR, DAYS_CARRIED_TO_MONTH, INVALID_DATE,
    MONTHS_PER_YEAR, NOT_AVAILABLE, ZERO_DURATION,
};
use hrms_domain::utils::dates::previous_month;
use hrms_domain::{days_in_month, DateValue, EmploymentBlock};
use serde::{Serialize, Serializer};

/// A years / months / days breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarSpan {
    /// Whole years
    pub years: i64,
    /// Months left over after the years, below 12
    pub months: i64,
    /// Days left over after the months
    pub days: i64,
}

impl CalendarSpan {
    /// Empty span, displayed as `0 Days`
    pub const ZERO: Self = Self { years: 0, months: 0, days: 0 };

    /// Span from its components
    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self { years, months, days }
    }

    /// Whether every component is zero
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

impl fmt::Display for CalendarSpan {
    /// `"3 Years, 2 Months, 10 Days"`; zero components are dropped
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str(ZERO_DURATION);
        }

        let parts: Vec<String> = [(self.years, "Year"), (self.months, "Month"), (self.days, "Day")]
            .into_iter()
            .filter(|(value, _)| *value != 0)
            .map(|(value, unit)| {
                if value == 1 {
                    format!("{value} {unit}")
                } else {
                    format!("{value} {unit}s")
                }
            })
            .collect();

        f.write_str(&parts.join(", "))
    }
}

impl Serialize for CalendarSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Elapsed time shown next to a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElapsedDuration {
    /// No start date was recorded
    NotApplicable,
    /// A recorded date could not be read
    InvalidDate,
    /// Both ends were readable
    Span(CalendarSpan),
}

impl ElapsedDuration {
    /// The span, when both ends were readable
    pub const fn span(&self) -> Option<CalendarSpan> {
        match self {
            Self::Span(span) => Some(*span),
            _ => None,
        }
    }
}

impl fmt::Display for ElapsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => f.write_str(NOT_AVAILABLE),
            Self::InvalidDate => f.write_str(INVALID_DATE),
            Self::Span(span) => span.fmt(f),
        }
    }
}

impl Serialize for ElapsedDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Exact elapsed time from `start` to `end`, both days included
///
/// An unset or open-ended `end` means `today`. A missing start yields
/// [`ElapsedDuration::NotApplicable`], an unreadable date
/// [`ElapsedDuration::InvalidDate`], and an end before the start a zero span.
pub fn calculate_detailed_duration(
    start: &DateValue,
    end: &DateValue,
    today: NaiveDate,
) -> ElapsedDuration {
    if !start.is_set() {
        return ElapsedDuration::NotApplicable;
    }
    let Some(start_date) = start.as_date() else {
        return ElapsedDuration::InvalidDate;
    };
    let end_date = match end {
        DateValue::Unset | DateValue::OpenEnded => today,
        DateValue::Concrete(date) => *date,
        DateValue::Malformed(_) => return ElapsedDuration::InvalidDate,
    };

    if end_date < start_date {
        return ElapsedDuration::Span(CalendarSpan::ZERO);
    }

    ElapsedDuration::Span(inclusive_calendar_span(start_date, end_date))
}

/// Calendar difference with the end day counted
///
/// One day is added to the raw day difference, then a negative day count
/// borrows the length of the month before the end month (repeatedly, if one
/// month is too short) and a negative month count borrows a year.
fn inclusive_calendar_span(start: NaiveDate, end: NaiveDate) -> CalendarSpan {
    let mut years = i64::from(end.year() - start.year());
    let mut months = i64::from(end.month()) - i64::from(start.month());
    let mut days = i64::from(end.day()) - i64::from(start.day()) + 1;

    let (mut borrow_year, mut borrow_month) = (end.year(), end.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        days += i64::from(days_in_month(borrow_year, borrow_month));
        months -= 1;
    }
    while months < 0 {
        months += MONTHS_PER_YEAR;
        years -= 1;
    }

    CalendarSpan { years, months, days }
}

/// Days from `start` to `end` with both ends counted; zero if reversed
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        0
    } else {
        (end - start).num_days() + 1
    }
}

/// Exact number of in-service days across every In-Service block
///
/// Each block is measured independently from its status date (else its
/// posting start) to its posting end, or to `today` when it is currently
/// working or has no end. Blocks without a readable start are skipped.
pub fn total_days_in_service(blocks: &[EmploymentBlock], today: NaiveDate) -> i64 {
    blocks
        .iter()
        .filter(|block| block.status.is_in_service())
        .filter_map(|block| {
            let days = in_service_days(block, today);
            if days.is_none() {
                tracing::debug!(block_id = %block.id, "skipping in-service block without a readable start");
            }
            days
        })
        .sum()
}

fn in_service_days(block: &EmploymentBlock, today: NaiveDate) -> Option<i64> {
    let start = block.status_date.or_else_set(&block.from_date).as_date()?;
    let end = if block.is_currently_working {
        today
    } else {
        block.to_date.as_date().unwrap_or(today)
    };
    Some(inclusive_days(start, end))
}

/// Total in-service time, approximated from the summed day count
///
/// Works on the history as stored; display ordering has no effect on it.
pub fn calculate_total_in_service_duration(
    blocks: &[EmploymentBlock],
    today: NaiveDate,
) -> CalendarSpan {
    span_from_day_count(total_days_in_service(blocks, today))
}

/// Convert a day count using 365.25-day years and 30.4375-day months
///
/// Leftover days are rounded; 30 or more carry into a month and 12 months
/// carry into a year.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn span_from_day_count(total_days: i64) -> CalendarSpan {
    if total_days <= 0 {
        return CalendarSpan::ZERO;
    }

    let total = total_days as f64;
    let whole_years = (total / AVERAGE_DAYS_PER_YEAR).floor();
    let remaining = total - whole_years * AVERAGE_DAYS_PER_YEAR;
    let whole_months = (remaining / AVERAGE_DAYS_PER_MONTH).floor();

    let mut years = whole_years as i64;
    let mut months = whole_months as i64;
    let mut days = (remaining - whole_months * AVERAGE_DAYS_PER_MONTH).round() as i64;

    if days >= DAYS_CARRIED_TO_MONTH {
        months += 1;
        days -= DAYS_CARRIED_TO_MONTH;
    }
    if months >= MONTHS_PER_YEAR {
        years += 1;
        months -= MONTHS_PER_YEAR;
    }

    CalendarSpan { years, months, days }
}

#[cfg(test)]
mod tests {
    use hrms_common::testing::ymd;
    use hrms_domain::EmploymentStatus;

    use super::*;

    fn concrete(y: i32, m: u32, d: u32) -> DateValue {
        DateValue::Concrete(ymd(y, m, d))
    }

    #[test]
    fn span_display_pluralizes_and_skips_zeros() {
        assert_eq!(CalendarSpan::new(3, 2, 10).to_string(), "3 Years, 2 Months, 10 Days");
        assert_eq!(CalendarSpan::new(1, 0, 1).to_string(), "1 Year, 1 Day");
        assert_eq!(CalendarSpan::new(0, 1, 0).to_string(), "1 Month");
        assert_eq!(CalendarSpan::ZERO.to_string(), "0 Days");
    }

    #[test]
    fn unset_start_is_not_applicable() {
        let today = ymd(2024, 1, 1);
        let result = calculate_detailed_duration(&DateValue::Unset, &DateValue::Unset, today);
        assert_eq!(result, ElapsedDuration::NotApplicable);
        assert_eq!(result.to_string(), "N/A");
    }

    #[test]
    fn malformed_dates_are_invalid() {
        let today = ymd(2024, 1, 1);
        let bad = DateValue::parse("31-31-2020");
        assert_eq!(
            calculate_detailed_duration(&bad, &DateValue::OpenEnded, today).to_string(),
            "Invalid Date"
        );
        assert_eq!(
            calculate_detailed_duration(&concrete(2020, 1, 1), &bad, today),
            ElapsedDuration::InvalidDate
        );
    }

    #[test]
    fn reversed_interval_is_zero_days() {
        let result =
            calculate_detailed_duration(&concrete(2020, 5, 1), &concrete(2020, 4, 30), ymd(2024, 1, 1));
        assert_eq!(result.to_string(), "0 Days");
    }

    #[test]
    fn same_day_counts_as_one_day() {
        let day = concrete(2020, 5, 1);
        assert_eq!(calculate_detailed_duration(&day, &day, ymd(2024, 1, 1)).to_string(), "1 Day");
    }

    #[test]
    fn borrows_days_from_previous_month() {
        // 15 Jun .. 10 Jul inclusive: 16 days of June + 10 of July
        let result =
            calculate_detailed_duration(&concrete(2015, 6, 15), &concrete(2015, 7, 10), ymd(2024, 1, 1));
        assert_eq!(result.span(), Some(CalendarSpan::new(0, 0, 26)));
    }

    #[test]
    fn month_ending_on_its_last_day_reads_in_days() {
        let today = ymd(2024, 1, 1);
        let january = calculate_detailed_duration(&concrete(2015, 1, 1), &concrete(2015, 1, 31), today);
        assert_eq!(january.to_string(), "31 Days");

        let whole_year = calculate_detailed_duration(&concrete(2015, 1, 1), &concrete(2015, 12, 31), today);
        assert_eq!(whole_year.span(), Some(CalendarSpan::new(0, 11, 31)));
        assert_eq!(whole_year.to_string(), "11 Months, 31 Days");
    }

    #[test]
    fn anniversary_eve_is_whole_years() {
        let result =
            calculate_detailed_duration(&concrete(2015, 6, 15), &concrete(2018, 6, 14), ymd(2024, 1, 1));
        assert_eq!(result.to_string(), "3 Years");
    }

    #[test]
    fn borrows_years_when_month_goes_negative() {
        let result =
            calculate_detailed_duration(&concrete(2010, 11, 20), &concrete(2013, 2, 4), ymd(2024, 1, 1));
        // 2010-11-20 + 2y 2m 16d = 2013-02-05, the day after the inclusive end
        assert_eq!(result.span(), Some(CalendarSpan::new(2, 2, 16)));
    }

    #[test]
    fn short_borrow_month_keeps_days_non_negative() {
        // February alone cannot cover a start on the 31st, so January is borrowed too
        let result =
            calculate_detailed_duration(&concrete(2021, 1, 31), &concrete(2021, 3, 1), ymd(2024, 1, 1));
        let span = result.span().unwrap();
        assert!(span.days >= 0 && span.months >= 0 && span.years >= 0);
        assert_eq!(span, CalendarSpan::new(0, 0, 30));
        assert_eq!(inclusive_days(ymd(2021, 1, 31), ymd(2021, 3, 1)), 30);
    }

    #[test]
    fn open_end_measures_to_today() {
        let today = ymd(2024, 6, 14);
        let result = calculate_detailed_duration(&concrete(2015, 6, 15), &DateValue::OpenEnded, today);
        assert_eq!(result.to_string(), "9 Years");
        let unset_end = calculate_detailed_duration(&concrete(2015, 6, 15), &DateValue::Unset, today);
        assert_eq!(unset_end, result);
    }

    #[test]
    fn inclusive_days_counts_both_ends() {
        assert_eq!(inclusive_days(ymd(2000, 1, 1), ymd(2000, 1, 1)), 1);
        assert_eq!(inclusive_days(ymd(2000, 1, 1), ymd(2001, 1, 1)), 367);
        assert_eq!(inclusive_days(ymd(2000, 1, 2), ymd(2000, 1, 1)), 0);
    }

    #[test]
    fn total_of_empty_history_is_zero_days() {
        assert_eq!(calculate_total_in_service_duration(&[], ymd(2024, 1, 1)).to_string(), "0 Days");
    }

    #[test]
    fn total_sums_disjoint_spans_not_the_envelope() {
        let blocks = vec![
            EmploymentBlock::new("A", EmploymentStatus::InService)
                .with_from_date(concrete(2000, 1, 1))
                .with_to_date(concrete(2001, 1, 1)),
            EmploymentBlock::new("B", EmploymentStatus::InService)
                .with_from_date(concrete(2005, 1, 1))
                .currently_working(true),
        ];
        let today = ymd(2010, 1, 1);

        // 367 days + 1827 days
        assert_eq!(total_days_in_service(&blocks, today), 2194);
        assert_eq!(calculate_total_in_service_duration(&blocks, today), CalendarSpan::new(6, 0, 3));
    }

    #[test]
    fn total_ignores_non_service_and_unreadable_blocks() {
        let blocks = vec![
            EmploymentBlock::new("A", EmploymentStatus::Resigned)
                .with_status_date(concrete(2001, 1, 1)),
            EmploymentBlock::new("B", EmploymentStatus::InService)
                .with_from_date(DateValue::parse("garbage")),
            EmploymentBlock::new("C", EmploymentStatus::InService)
                .with_status_date(concrete(2003, 1, 1))
                .with_from_date(concrete(2002, 1, 1))
                .with_to_date(concrete(2003, 1, 10)),
        ];

        assert_eq!(total_days_in_service(&blocks, ymd(2024, 1, 1)), 10);
    }

    #[test]
    fn currently_working_flag_overrides_recorded_end() {
        let block = EmploymentBlock::new("A", EmploymentStatus::InService)
            .with_from_date(concrete(2020, 1, 1))
            .with_to_date(concrete(2020, 1, 5))
            .currently_working(true);

        assert_eq!(total_days_in_service(&[block], ymd(2020, 1, 31)), 31);
    }

    #[test]
    fn day_count_conversion_carries_days_and_months() {
        assert_eq!(span_from_day_count(0), CalendarSpan::ZERO);
        assert_eq!(span_from_day_count(-5), CalendarSpan::ZERO);
        assert_eq!(span_from_day_count(1), CalendarSpan::new(0, 0, 1));
        // 30.2 leftover days round to 30 and carry into a month
        assert_eq!(span_from_day_count(30), CalendarSpan::new(0, 1, 0));
        // 365 days is 11 average months plus 30.1875 days -> 12 months -> 1 year
        assert_eq!(span_from_day_count(365), CalendarSpan::new(1, 0, 0));
        assert_eq!(span_from_day_count(366), CalendarSpan::new(1, 0, 1));
    }
}
