use crate::modules::attendance::core::errors::AttendanceError;
use crate::modules::attendance::use_cases::outcome::ApplicationError;
use crate::modules::attendance::use_cases::summarize_timesheet::projection::TimesheetSummary;
use crate::shared::core::primitives::{EmployeeId, Minutes, YearMonth};
use crate::shared::infrastructure::timesheet_store::TimesheetStore;
use std::sync::Arc;

pub struct SummarizeTimesheetHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    store: Arc<TStore>,
    standard_minutes_per_day: Minutes,
}

impl<TStore> SummarizeTimesheetHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    pub fn new(store: Arc<TStore>, standard_minutes_per_day: Minutes) -> Self {
        Self {
            store,
            standard_minutes_per_day,
        }
    }

    pub async fn handle(
        &self,
        employee_id: &str,
        period: YearMonth,
    ) -> Result<TimesheetSummary, ApplicationError> {
        let employee_id = EmployeeId::new(employee_id)?;
        let timesheet = self
            .store
            .find_by(&employee_id, period)
            .await?
            .ok_or_else(|| {
                AttendanceError::NotFound(format!(
                    "No timesheet found for employee {employee_id} in {period}"
                ))
            })?;
        Ok(TimesheetSummary::from_timesheet(
            &timesheet,
            self.standard_minutes_per_day,
        ))
    }
}
