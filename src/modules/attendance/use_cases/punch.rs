// Input shared by the clock-in, clock-out, start-break and end-break use cases.
//
// Responsibilities
// - Carry the raw request (employee id + wall-clock timestamp), independent of transport.
// - Parse timestamps with or without a UTC offset; the offset is dropped and the local wall clock kept.
// - Resolve it into validated values: the entry date and timesheet period derive from the timestamp.
// - Load the existing entry a punch applies to, reporting a missing timesheet or entry as not found.

use crate::modules::attendance::core::entry::AttendanceEntry;
use crate::modules::attendance::core::errors::AttendanceError;
use crate::modules::attendance::core::timesheet::Timesheet;
use crate::modules::attendance::use_cases::outcome::ApplicationError;
use crate::shared::core::primitives::{CalendarDate, EmployeeId, Instant, PrimitiveError, YearMonth};
use crate::shared::infrastructure::timesheet_store::TimesheetStore;
use chrono::{DateTime, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceCommand {
    pub employee_id: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punch {
    pub employee_id: EmployeeId,
    pub at: Instant,
    pub date: CalendarDate,
    pub period: YearMonth,
}

impl AttendanceCommand {
    pub fn new(employee_id: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            employee_id: employee_id.into(),
            timestamp,
        }
    }

    pub fn resolve(&self) -> Result<Punch, PrimitiveError> {
        let at = Instant::new(self.timestamp);
        let date = at.date();
        Ok(Punch {
            employee_id: EmployeeId::new(self.employee_id.clone())?,
            at,
            date,
            period: date.year_month()?,
        })
    }
}

/// Accepts `2024-01-15T09:00:00`, `2024-01-15T09:00:00Z` and `2024-01-15T09:00:00+09:00`.
/// An offset is discarded: entries are keyed by the employee's local date.
pub fn parse_wall_clock(timestamp: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let timestamp = timestamp.trim();
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.naive_local())
        .or_else(|_| timestamp.parse::<NaiveDateTime>())
}

pub(crate) async fn load_entry<TStore>(
    store: &TStore,
    punch: &Punch,
    missing_entry_message: &str,
) -> Result<(Timesheet, AttendanceEntry), ApplicationError>
where
    TStore: TimesheetStore + ?Sized,
{
    let timesheet = store
        .find_by(&punch.employee_id, punch.period)
        .await?
        .ok_or_else(|| {
            AttendanceError::NotFound("No timesheet found for this employee and month".into())
        })?;
    let entry = timesheet
        .get_entry(punch.date)
        .cloned()
        .ok_or_else(|| AttendanceError::NotFound(missing_entry_message.into()))?;
    Ok((timesheet, entry))
}
