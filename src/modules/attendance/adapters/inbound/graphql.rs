use async_graphql::{Result as GqlResult, SimpleObject};

use crate::modules::attendance::use_cases::outcome::AttendanceOutcome;
use crate::modules::attendance::use_cases::punch::{AttendanceCommand, parse_wall_clock};
use crate::modules::attendance::use_cases::summarize_timesheet::projection::{
    EntrySummary, TimesheetSummary,
};

#[derive(SimpleObject, Clone)]
pub struct GqlAttendanceOutcome {
    pub success: bool,
    pub message: String,
    pub employee_id: String,
    pub date: String,
    pub timestamp: String,
    pub current_state: String,
    pub worked_minutes: Option<i64>,
    pub break_duration_minutes: Option<i64>,
}

impl From<AttendanceOutcome> for GqlAttendanceOutcome {
    fn from(o: AttendanceOutcome) -> Self {
        Self {
            success: o.success,
            message: o.message,
            employee_id: o.employee_id,
            date: o.date,
            timestamp: o.timestamp,
            current_state: o.current_state,
            worked_minutes: o.worked_minutes,
            break_duration_minutes: o.break_duration_minutes,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEntrySummary {
    pub date: String,
    pub state: String,
    pub clock_in_at: Option<String>,
    pub clock_out_at: Option<String>,
    pub break_count: i64,
    pub break_minutes: i64,
    pub worked_minutes: Option<i64>,
    pub complete: bool,
    pub notes: String,
}

impl From<EntrySummary> for GqlEntrySummary {
    fn from(e: EntrySummary) -> Self {
        Self {
            date: e.date,
            state: e.state.to_string(),
            clock_in_at: e.clock_in_at,
            clock_out_at: e.clock_out_at,
            break_count: i64::try_from(e.break_count).unwrap_or(i64::MAX),
            break_minutes: e.break_minutes,
            worked_minutes: e.worked_minutes,
            complete: e.complete,
            notes: e.notes,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheetSummary {
    pub timesheet_id: String,
    pub employee_id: String,
    pub year_month: String,
    pub status: String,
    pub total_worked_minutes: i64,
    pub overtime_minutes: i64,
    pub entries: Vec<GqlEntrySummary>,
}

impl From<TimesheetSummary> for GqlTimesheetSummary {
    fn from(s: TimesheetSummary) -> Self {
        Self {
            timesheet_id: s.timesheet_id,
            employee_id: s.employee_id,
            year_month: s.year_month,
            status: s.status.to_string(),
            total_worked_minutes: s.total_worked_minutes,
            overtime_minutes: s.overtime_minutes,
            entries: s.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Timestamps arrive as ISO date-times, e.g. `2024-01-15T09:00:00` or `2024-01-15T09:00:00Z`.
pub fn punch_command(employee_id: String, timestamp: &str) -> GqlResult<AttendanceCommand> {
    let timestamp = parse_wall_clock(timestamp)
        .map_err(|e| async_graphql::Error::new(format!("invalid timestamp {timestamp}: {e}")))?;
    Ok(AttendanceCommand::new(employee_id, timestamp))
}
