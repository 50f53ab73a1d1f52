// Immutable, self-validating value objects shared by the attendance context.
//
// Every constructor validates its input and nothing mutates afterwards. A change
// means building a new value.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("invalid month: {0}")]
    InvalidMonth(u32),

    #[error("invalid year: {0}")]
    InvalidYear(i32),

    #[error("invalid year-month format: {0}")]
    InvalidYearMonthFormat(String),

    #[error("minutes must be non-negative: {0}")]
    NegativeMinutes(i64),

    #[error("start date {start} must be before or equal to end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("start time {start} must be before end time {end}")]
    InvalidTimeRange { start: String, end: String },

    #[error("{0} is required")]
    MissingIdentifier(&'static str),

    #[error("{0} is required")]
    MissingText(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Result<Self, PrimitiveError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PrimitiveError::MissingIdentifier("employee id"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetId(String);

impl TimesheetId {
    pub fn new(value: impl Into<String>) -> Result<Self, PrimitiveError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PrimitiveError::MissingIdentifier("timesheet id"));
        }
        Ok(Self(value))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimesheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new(value: impl Into<String>) -> Result<Self, PrimitiveError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PrimitiveError::MissingIdentifier("request id"));
        }
        Ok(Self(value))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar month, the period a timesheet covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub const MIN_YEAR: i32 = 1900;
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32, month: u32) -> Result<Self, PrimitiveError> {
        if !(1..=12).contains(&month) {
            return Err(PrimitiveError::InvalidMonth(month));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(PrimitiveError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> CalendarDate {
        // year and month were validated at construction
        CalendarDate(NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default())
    }

    pub fn last_day(&self) -> CalendarDate {
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        let last = next_first
            .and_then(|d| d.pred_opt())
            .unwrap_or_else(|| self.first_day().value());
        CalendarDate(last)
    }

    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.first_day(),
            end: self.last_day(),
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.value().year() == self.year && date.value().month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = PrimitiveError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || PrimitiveError::InvalidYearMonthFormat(value.to_string());
        let mut parts = value.split('-');
        let (Some(year), Some(month), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(value: NaiveDate) -> Self {
        Self(value)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn year_month(&self) -> Result<YearMonth, PrimitiveError> {
        YearMonth::new(self.0.year(), self.0.month())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A point in time on the employee's wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Instant(NaiveDateTime);

impl Instant {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> CalendarDate {
        CalendarDate(self.0.date())
    }

    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }

    pub fn signed_duration_since(&self, earlier: Instant) -> Duration {
        self.0.signed_duration_since(earlier.0)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Whole, non-negative minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Minutes(i64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub fn new(value: i64) -> Result<Self, PrimitiveError> {
        if value < 0 {
            return Err(PrimitiveError::NegativeMinutes(value));
        }
        Ok(Self(value))
    }

    pub fn from_hours(hours: i64) -> Result<Self, PrimitiveError> {
        Self::new(hours.saturating_mul(60))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Floor of the whole seconds in `duration` divided by 60, clamped at zero.
    pub fn floor_of(duration: Duration) -> Self {
        Self(duration.num_seconds().div_euclid(60).max(0))
    }

    pub fn saturating_sub(self, other: Minutes) -> Minutes {
        Minutes((self.0 - other.0).max(0))
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, other: Minutes) -> Minutes {
        Minutes(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Self {
        iter.fold(Minutes::ZERO, Add::add)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, PrimitiveError> {
        if start > end {
            return Err(PrimitiveError::InvalidDateRange {
                start: start.value(),
                end: end.value(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end.value() - self.start.value()).num_days() + 1
    }
}

/// Half-open span of time with a strictly positive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: Instant,
    end: Instant,
}

impl TimeRange {
    pub fn new(start: Instant, end: Instant) -> Result<Self, PrimitiveError> {
        if start >= end {
            return Err(PrimitiveError::InvalidTimeRange {
                start: start.to_iso8601(),
                end: end.to_iso8601(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn duration(&self) -> Minutes {
        Minutes::floor_of(self.end.signed_duration_since(self.start))
    }
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use crate::tests::fixtures::{at, at_seconds, date};
    use rstest::rstest;

    #[rstest]
    #[case(2024, 1)]
    #[case(1900, 12)]
    #[case(9999, 6)]
    fn it_should_accept_a_valid_year_month(#[case] year: i32, #[case] month: u32) {
        let period = YearMonth::new(year, month).unwrap();
        assert_eq!(period.year(), year);
        assert_eq!(period.month(), month);
    }

    #[rstest]
    #[case(2024, 0, PrimitiveError::InvalidMonth(0))]
    #[case(2024, 13, PrimitiveError::InvalidMonth(13))]
    #[case(1899, 5, PrimitiveError::InvalidYear(1899))]
    #[case(10000, 5, PrimitiveError::InvalidYear(10000))]
    fn it_should_reject_an_invalid_year_month(
        #[case] year: i32,
        #[case] month: u32,
        #[case] expected: PrimitiveError,
    ) {
        assert_eq!(YearMonth::new(year, month), Err(expected));
    }

    #[rstest]
    fn it_should_render_and_parse_the_canonical_year_month_text() {
        let period = YearMonth::new(2024, 3).unwrap();
        assert_eq!(period.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), period);
    }

    #[rstest]
    #[case("2024")]
    #[case("2024-03-01")]
    #[case("abcd-03")]
    #[case("2024-xx")]
    #[case("")]
    fn it_should_fail_to_parse_a_malformed_year_month(#[case] text: &str) {
        assert_eq!(
            text.parse::<YearMonth>(),
            Err(PrimitiveError::InvalidYearMonthFormat(text.to_string()))
        );
    }

    #[rstest]
    fn it_should_fail_to_parse_an_out_of_range_month() {
        assert_eq!(
            "2024-13".parse::<YearMonth>(),
            Err(PrimitiveError::InvalidMonth(13))
        );
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(2024, 12, 31)]
    #[case(2024, 4, 30)]
    fn it_should_know_the_last_day_of_the_month(
        #[case] year: i32,
        #[case] month: u32,
        #[case] last: u32,
    ) {
        let period = YearMonth::new(year, month).unwrap();
        assert_eq!(period.last_day(), date(year, month, last));
        assert_eq!(period.date_range().days(), i64::from(last));
    }

    #[rstest]
    fn it_should_tell_whether_a_date_falls_in_the_month() {
        let period = YearMonth::new(2024, 1).unwrap();
        assert!(period.contains(date(2024, 1, 1)));
        assert!(period.contains(date(2024, 1, 31)));
        assert!(!period.contains(date(2024, 2, 1)));
        assert!(!period.contains(date(2023, 1, 15)));
        assert!(period.date_range().contains(date(2024, 1, 15)));
    }

    #[rstest]
    fn it_should_generate_distinct_request_ids_and_refuse_blank_ones() {
        assert_ne!(RequestId::generate(), RequestId::generate());
        assert_eq!(RequestId::new("LR-1").unwrap().as_str(), "LR-1");
        assert_eq!(
            RequestId::new(""),
            Err(PrimitiveError::MissingIdentifier("request id"))
        );
    }

    #[rstest]
    fn it_should_reject_negative_minutes() {
        assert_eq!(Minutes::new(-1), Err(PrimitiveError::NegativeMinutes(-1)));
        assert_eq!(Minutes::new(0).unwrap(), Minutes::ZERO);
        assert_eq!(Minutes::from_hours(8).unwrap().value(), 480);
    }

    #[rstest]
    fn it_should_clamp_minutes_subtraction_at_zero() {
        let ten = Minutes::new(10).unwrap();
        let thirty = Minutes::new(30).unwrap();
        assert_eq!(thirty.saturating_sub(ten).value(), 20);
        assert_eq!(ten.saturating_sub(thirty), Minutes::ZERO);
    }

    #[rstest]
    fn it_should_truncate_partial_minutes() {
        let range = TimeRange::new(at(9, 0), at_seconds(9, 1, 59)).unwrap();
        assert_eq!(range.duration().value(), 1);
    }

    #[rstest]
    fn it_should_reject_an_empty_or_inverted_time_range() {
        assert!(TimeRange::new(at(9, 0), at(9, 0)).is_err());
        assert!(TimeRange::new(at(10, 0), at(9, 0)).is_err());
    }

    #[rstest]
    fn it_should_reject_an_inverted_date_range() {
        assert!(DateRange::new(date(2024, 1, 2), date(2024, 1, 1)).is_err());
        assert_eq!(
            DateRange::new(date(2024, 1, 1), date(2024, 1, 1))
                .unwrap()
                .days(),
            1
        );
    }

    #[rstest]
    fn it_should_order_instants_and_render_them_as_iso8601() {
        assert!(at(9, 0) < at(9, 1));
        assert!(at(9, 0) <= at(9, 0));
        assert_eq!(at(9, 5).to_iso8601(), "2024-01-15T09:05:00");
        assert_eq!(at(9, 5).date().to_string(), "2024-01-15");
    }

    #[rstest]
    fn it_should_reject_blank_identifiers() {
        assert!(EmployeeId::new("  ").is_err());
        assert!(TimesheetId::new("").is_err());
        assert_eq!(EmployeeId::new("EMP001").unwrap().as_str(), "EMP001");
        assert_ne!(TimesheetId::generate(), TimesheetId::generate());
    }
}
