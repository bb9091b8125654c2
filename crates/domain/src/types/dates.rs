//! Tagged date values
//!
//! Employee records carry dates as loosely formatted strings with two magic
//! values: the empty date `"0000-00-00"` (or an empty string) meaning "not
//! recorded", and an open-span token meaning "still running". [`DateValue`]
//! turns those into explicit variants at the edge so nothing downstream
//! compares strings.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{EMPTY_DATE_SENTINEL, ISO_DATE_FORMAT, OPEN_SPAN_TOKEN};

const NAIVE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const SLASHED_DATE_FORMAT: &str = "%d/%m/%Y";

/// A date as it appears on an employee record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateValue {
    /// Not recorded (`""`, `"0000-00-00"` or null)
    #[default]
    Unset,
    /// Span still running; rendered as "Present"
    OpenEnded,
    /// A real calendar date
    Concrete(NaiveDate),
    /// Something was recorded but it is not a date; kept verbatim
    Malformed(String),
}

impl DateValue {
    /// Parse a raw date string, never failing
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with(EMPTY_DATE_SENTINEL) {
            return Self::Unset;
        }
        if trimmed.eq_ignore_ascii_case(OPEN_SPAN_TOKEN) {
            return Self::OpenEnded;
        }

        parse_calendar_date(trimmed)
            .map_or_else(|| Self::Malformed(raw.to_string()), Self::Concrete)
    }

    /// Parse an optional raw string; `None` is [`DateValue::Unset`]
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map_or(Self::Unset, Self::parse)
    }

    /// Whether anything was recorded (open spans and malformed text count)
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::OpenEnded)
    }

    /// The calendar date, if this is a concrete one
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Concrete(date) => Some(*date),
            _ => None,
        }
    }

    /// First set value of `self`, then `fallback`
    #[must_use]
    pub fn or_else_set(&self, fallback: &Self) -> Self {
        if self.is_set() {
            self.clone()
        } else {
            fallback.clone()
        }
    }

    /// Text written back to the wire; `None` for unset
    pub fn wire_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Unset => None,
            Self::OpenEnded => Some(Cow::Borrowed(OPEN_SPAN_TOKEN)),
            Self::Concrete(date) => Some(Cow::Owned(date.format(ISO_DATE_FORMAT).to_string())),
            Self::Malformed(raw) => Some(Cow::Borrowed(raw.as_str())),
        }
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(input) {
        return Some(stamp.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|stamp| stamp.date())
        .or_else(|| NaiveDate::parse_from_str(input, SLASHED_DATE_FORMAT).ok())
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Concrete(date)
    }
}

impl From<Option<NaiveDate>> for DateValue {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Unset, Self::Concrete)
    }
}

impl FromStr for DateValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wire_text() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.wire_text() {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_option(raw.as_deref()))
    }
}
