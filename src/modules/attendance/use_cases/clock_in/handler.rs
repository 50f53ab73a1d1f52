use crate::modules::attendance::core::timesheet::Timesheet;
use crate::modules::attendance::use_cases::outcome::{ApplicationError, AttendanceOutcome, report};
use crate::modules::attendance::use_cases::punch::AttendanceCommand;
use crate::shared::infrastructure::timesheet_store::TimesheetStore;
use std::sync::Arc;

/// Opens the day: the only punch allowed to create the month's timesheet and the day's entry.
pub struct ClockInHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ClockInHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AttendanceCommand) -> AttendanceOutcome {
        let result = self.execute(&command).await;
        report("clock in", &command, result)
    }

    async fn execute(
        &self,
        command: &AttendanceCommand,
    ) -> Result<AttendanceOutcome, ApplicationError> {
        let punch = command.resolve()?;
        let mut timesheet = match self.store.find_by(&punch.employee_id, punch.period).await? {
            Some(timesheet) => timesheet,
            None => Timesheet::new(punch.employee_id.clone(), punch.period),
        };

        let entry = timesheet.get_or_create_entry(punch.date)?.clock_in(punch.at)?;
        let state = entry.state();
        timesheet.add_or_update_entry(entry)?;
        self.store.save(&timesheet).await?;

        Ok(AttendanceOutcome::succeeded(
            command,
            "Successfully clocked in",
            state,
        ))
    }
}
