// Moves a month's timesheet through its review workflow.
//
// Flow
// - Load the timesheet for (employee, month); absent is NotFound.
// - Apply the requested transition; a wrong-status request leaves the stored copy untouched.
// - Save with compare-and-swap, so a concurrent punch or review surfaces as a store conflict.

use crate::modules::attendance::core::errors::AttendanceError;
use crate::modules::attendance::core::timesheet::{Timesheet, TimesheetStatus};
use crate::modules::attendance::use_cases::outcome::ApplicationError;
use crate::shared::core::primitives::{EmployeeId, YearMonth};
use crate::shared::infrastructure::timesheet_store::TimesheetStore;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Submit,
    Approve,
    Reject,
    Reopen,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Submit => "submit",
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
            ReviewAction::Reopen => "reopen",
        }
    }

    fn apply(&self, timesheet: &mut Timesheet) -> Result<(), AttendanceError> {
        match self {
            ReviewAction::Submit => timesheet.submit(),
            ReviewAction::Approve => timesheet.approve(),
            ReviewAction::Reject => timesheet.reject(),
            ReviewAction::Reopen => timesheet.reopen(),
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review action: {0}")]
pub struct UnknownReviewAction(pub String);

impl FromStr for ReviewAction {
    type Err = UnknownReviewAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "submit" => Ok(ReviewAction::Submit),
            "approve" => Ok(ReviewAction::Approve),
            "reject" => Ok(ReviewAction::Reject),
            "reopen" => Ok(ReviewAction::Reopen),
            other => Err(UnknownReviewAction(other.to_string())),
        }
    }
}

pub struct ReviewTimesheetHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReviewTimesheetHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        employee_id: &str,
        period: YearMonth,
        action: ReviewAction,
    ) -> Result<TimesheetStatus, ApplicationError> {
        let employee_id = EmployeeId::new(employee_id)?;
        let mut timesheet = self
            .store
            .find_by(&employee_id, period)
            .await?
            .ok_or_else(|| {
                AttendanceError::NotFound(format!(
                    "No timesheet found for employee {employee_id} in {period}"
                ))
            })?;

        if let Err(error) = action.apply(&mut timesheet) {
            tracing::warn!(%employee_id, %period, %action, %error, "timesheet review rejected");
            return Err(error.into());
        }
        self.store.save(&timesheet).await?;

        tracing::info!(%employee_id, %period, %action, status = %timesheet.status(), "timesheet reviewed");
        Ok(timesheet.status())
    }
}
