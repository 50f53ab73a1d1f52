use crate::modules::attendance::core::entry::{AttendanceEntry, AttendanceState};
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetStatus};
use crate::shared::core::primitives::Minutes;
use serde::Serialize;

/// Read model of one month of attendance, as returned by the query surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimesheetSummary {
    pub timesheet_id: String,
    pub employee_id: String,
    pub year_month: String,
    pub status: TimesheetStatus,
    pub total_worked_minutes: i64,
    pub overtime_minutes: i64,
    pub entries: Vec<EntrySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub date: String,
    pub state: AttendanceState,
    pub clock_in_at: Option<String>,
    pub clock_out_at: Option<String>,
    pub break_count: usize,
    pub break_minutes: i64,
    pub worked_minutes: Option<i64>,
    pub complete: bool,
    pub notes: String,
}

impl TimesheetSummary {
    pub fn from_timesheet(timesheet: &Timesheet, standard_minutes_per_day: Minutes) -> Self {
        Self {
            timesheet_id: timesheet.id().to_string(),
            employee_id: timesheet.employee_id().to_string(),
            year_month: timesheet.period().to_string(),
            status: timesheet.status(),
            total_worked_minutes: timesheet.calculate_total_worked_minutes().value(),
            overtime_minutes: timesheet
                .calculate_overtime_minutes(standard_minutes_per_day)
                .value(),
            entries: timesheet.entries().map(EntrySummary::from_entry).collect(),
        }
    }
}

impl EntrySummary {
    pub fn from_entry(entry: &AttendanceEntry) -> Self {
        Self {
            date: entry.date().to_string(),
            state: entry.state(),
            clock_in_at: entry.clock_in_at().map(|at| at.to_iso8601()),
            clock_out_at: entry.clock_out_at().map(|at| at.to_iso8601()),
            break_count: entry.breaks().len(),
            break_minutes: entry.break_minutes().value(),
            worked_minutes: entry.calculate_worked_minutes().map(|m| m.value()),
            complete: entry.is_complete(),
            notes: entry.notes().to_string(),
        }
    }
}

#[cfg(test)]
mod timesheet_summary_tests {
    use super::*;
    use crate::modules::attendance::core::timesheet::DEFAULT_STANDARD_MINUTES_PER_DAY;
    use crate::tests::fixtures::{date, employee, january, on};
    use rstest::rstest;

    fn worked_day(d: u32, from: (u32, u32), to: (u32, u32)) -> AttendanceEntry {
        AttendanceEntry::new(date(2024, 1, d))
            .clock_in(on(2024, 1, d, from.0, from.1))
            .and_then(|e| e.start_break(on(2024, 1, d, 12, 0)))
            .and_then(|e| e.end_break(on(2024, 1, d, 12, 30)))
            .and_then(|e| e.clock_out(on(2024, 1, d, to.0, to.1)))
            .unwrap()
    }

    #[rstest]
    fn it_should_summarize_totals_and_entries_in_date_order() {
        let mut timesheet = Timesheet::new(employee(), january());
        timesheet
            .add_or_update_entry(worked_day(16, (8, 0), (18, 30)))
            .unwrap();
        timesheet
            .add_or_update_entry(worked_day(15, (9, 0), (17, 30)).with_notes("dentist at 8"))
            .unwrap();
        timesheet
            .add_or_update_entry(
                AttendanceEntry::new(date(2024, 1, 17))
                    .clock_in(on(2024, 1, 17, 9, 0))
                    .unwrap(),
            )
            .unwrap();

        let summary = TimesheetSummary::from_timesheet(
            &timesheet,
            Minutes::new(DEFAULT_STANDARD_MINUTES_PER_DAY).unwrap(),
        );

        assert_eq!(summary.employee_id, "EMP001");
        assert_eq!(summary.year_month, "2024-01");
        assert_eq!(summary.status, TimesheetStatus::Draft);
        assert_eq!(summary.total_worked_minutes, 480 + 600);
        assert_eq!(summary.overtime_minutes, 120);
        let dates: Vec<_> = summary.entries.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-15", "2024-01-16", "2024-01-17"]);
        assert_eq!(summary.entries[0].break_minutes, 30);
        assert_eq!(summary.entries[0].clock_in_at.as_deref(), Some("2024-01-15T09:00:00"));
        assert!(summary.entries[0].complete);
        assert_eq!(summary.entries[0].notes, "dentist at 8");
        assert_eq!(summary.entries[1].notes, "");
        assert_eq!(summary.entries[2].worked_minutes, None);
        assert_eq!(summary.entries[2].state, AttendanceState::ClockedIn);
    }

    #[rstest]
    fn it_should_serialize_status_and_state_in_snake_case() {
        let mut timesheet = Timesheet::new(employee(), january());
        timesheet
            .add_or_update_entry(worked_day(15, (9, 0), (17, 30)))
            .unwrap();
        timesheet.submit().unwrap();

        let json = serde_json::to_value(TimesheetSummary::from_timesheet(
            &timesheet,
            Minutes::new(DEFAULT_STANDARD_MINUTES_PER_DAY).unwrap(),
        ))
        .unwrap();

        assert_eq!(json["status"], "submitted");
        assert_eq!(json["entries"][0]["state"], "clocked_out");
        assert_eq!(json["entries"][0]["worked_minutes"], 480);
        assert_eq!(json["entries"][0]["notes"], "");
    }
}
