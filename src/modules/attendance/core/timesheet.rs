// A month of attendance entries for one employee, plus its review workflow.
//
// Workflow
// - DRAFT -> submit -> SUBMITTED -> approve | reject -> APPROVED | REJECTED
// - REJECTED -> reopen -> DRAFT
//
// Invariants
// - Every entry date falls inside `period`; one entry per date.
// - Entries change only while the status is DRAFT or REJECTED.
// - `version` counts successful saves; stores use it for compare-and-swap.

use crate::modules::attendance::core::entry::AttendanceEntry;
use crate::modules::attendance::core::errors::AttendanceError;
use crate::shared::core::primitives::{CalendarDate, EmployeeId, Minutes, TimesheetId, YearMonth};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_STANDARD_MINUTES_PER_DAY: i64 = 8 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Draft => "draft",
            TimesheetStatus::Submitted => "submitted",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timesheet {
    id: TimesheetId,
    employee_id: EmployeeId,
    period: YearMonth,
    entries: BTreeMap<CalendarDate, AttendanceEntry>,
    status: TimesheetStatus,
    version: i64,
}

impl Timesheet {
    pub fn new(employee_id: EmployeeId, period: YearMonth) -> Self {
        Self {
            id: TimesheetId::generate(),
            employee_id,
            period,
            entries: BTreeMap::new(),
            status: TimesheetStatus::Draft,
            version: 0,
        }
    }

    pub fn restore(
        id: TimesheetId,
        employee_id: EmployeeId,
        period: YearMonth,
        status: TimesheetStatus,
        entries: Vec<AttendanceEntry>,
        version: i64,
    ) -> Result<Self, AttendanceError> {
        let mut timesheet = Self {
            id,
            employee_id,
            period,
            entries: BTreeMap::new(),
            status,
            version,
        };
        for entry in entries {
            timesheet.ensure_in_period(entry.date())?;
            if timesheet.entries.contains_key(&entry.date()) {
                return Err(AttendanceError::DuplicateEntry { date: entry.date() });
            }
            timesheet.entries.insert(entry.date(), entry);
        }
        Ok(timesheet)
    }

    pub fn id(&self) -> &TimesheetId {
        &self.id
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    pub fn period(&self) -> YearMonth {
        self.period
    }

    pub fn status(&self) -> TimesheetStatus {
        self.status
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub(crate) fn mark_saved(&mut self) {
        self.version += 1;
    }

    /// Entries in date order.
    pub fn entries(&self) -> impl Iterator<Item = &AttendanceEntry> {
        self.entries.values()
    }

    pub fn get_entry(&self, date: CalendarDate) -> Option<&AttendanceEntry> {
        self.entries.get(&date)
    }

    pub fn is_editable(&self) -> bool {
        matches!(
            self.status,
            TimesheetStatus::Draft | TimesheetStatus::Rejected
        )
    }

    pub fn get_or_create_entry(
        &mut self,
        date: CalendarDate,
    ) -> Result<&AttendanceEntry, AttendanceError> {
        if !self.entries.contains_key(&date) {
            self.ensure_editable()?;
            self.ensure_in_period(date)?;
            self.entries.insert(date, AttendanceEntry::new(date));
        }
        self.entries
            .get(&date)
            .ok_or_else(|| AttendanceError::NotFound(format!("no attendance entry for {date}")))
    }

    pub fn add_or_update_entry(&mut self, entry: AttendanceEntry) -> Result<(), AttendanceError> {
        self.ensure_editable()?;
        self.ensure_in_period(entry.date())?;
        self.entries.insert(entry.date(), entry);
        Ok(())
    }

    pub fn insert_entry(&mut self, entry: AttendanceEntry) -> Result<(), AttendanceError> {
        self.ensure_editable()?;
        self.ensure_in_period(entry.date())?;
        if self.entries.contains_key(&entry.date()) {
            return Err(AttendanceError::DuplicateEntry { date: entry.date() });
        }
        self.entries.insert(entry.date(), entry);
        Ok(())
    }

    pub fn submit(&mut self) -> Result<(), AttendanceError> {
        self.move_status("submit", TimesheetStatus::Draft, TimesheetStatus::Submitted)
    }

    pub fn approve(&mut self) -> Result<(), AttendanceError> {
        self.move_status(
            "approve",
            TimesheetStatus::Submitted,
            TimesheetStatus::Approved,
        )
    }

    pub fn reject(&mut self) -> Result<(), AttendanceError> {
        self.move_status(
            "reject",
            TimesheetStatus::Submitted,
            TimesheetStatus::Rejected,
        )
    }

    pub fn reopen(&mut self) -> Result<(), AttendanceError> {
        self.move_status("reopen", TimesheetStatus::Rejected, TimesheetStatus::Draft)
    }

    pub fn calculate_total_worked_minutes(&self) -> Minutes {
        self.entries
            .values()
            .filter_map(AttendanceEntry::calculate_worked_minutes)
            .sum()
    }

    pub fn calculate_overtime_minutes(&self, standard_minutes_per_day: Minutes) -> Minutes {
        self.entries
            .values()
            .filter_map(AttendanceEntry::calculate_worked_minutes)
            .map(|worked| worked.saturating_sub(standard_minutes_per_day))
            .sum()
    }

    fn move_status(
        &mut self,
        operation: &'static str,
        from: TimesheetStatus,
        to: TimesheetStatus,
    ) -> Result<(), AttendanceError> {
        if self.status != from {
            return Err(AttendanceError::invalid_state(operation, self.status));
        }
        self.status = to;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), AttendanceError> {
        if !self.is_editable() {
            return Err(AttendanceError::TimesheetAlreadySubmitted {
                status: self.status.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_in_period(&self, date: CalendarDate) -> Result<(), AttendanceError> {
        if !self.period.contains(date) {
            return Err(AttendanceError::PeriodMismatch {
                date,
                period: self.period,
            });
        }
        Ok(())
    }
}
