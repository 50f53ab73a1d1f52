// Canonical values for tests: EMP001, January 2024, Monday the 15th.

use crate::shared::core::primitives::{CalendarDate, EmployeeId, Instant, YearMonth};
use chrono::NaiveDate;

pub fn on(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
    Instant::new(
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap(),
    )
}

/// A time of day on 2024-01-15.
pub fn at(hour: u32, minute: u32) -> Instant {
    on(2024, 1, 15, hour, minute)
}

pub fn at_seconds(hour: u32, minute: u32, second: u32) -> Instant {
    Instant::new(
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .unwrap(),
    )
}

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

pub fn day() -> CalendarDate {
    date(2024, 1, 15)
}

pub fn january() -> YearMonth {
    YearMonth::new(2024, 1).unwrap()
}

pub fn employee() -> EmployeeId {
    EmployeeId::new("EMP001").unwrap()
}
