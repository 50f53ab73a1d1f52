use crate::modules::attendance::use_cases::outcome::{ApplicationError, AttendanceOutcome, report};
use crate::modules::attendance::use_cases::punch::{AttendanceCommand, load_entry};
use crate::shared::infrastructure::timesheet_store::TimesheetStore;
use std::sync::Arc;

pub struct StartBreakHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> StartBreakHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AttendanceCommand) -> AttendanceOutcome {
        let result = self.execute(&command).await;
        report("start break", &command, result)
    }

    async fn execute(
        &self,
        command: &AttendanceCommand,
    ) -> Result<AttendanceOutcome, ApplicationError> {
        let punch = command.resolve()?;
        let (mut timesheet, entry) = load_entry(
            &*self.store,
            &punch,
            "No attendance entry found for this date. Please clock in first.",
        )
        .await?;

        let entry = entry.start_break(punch.at)?;
        let state = entry.state();
        timesheet.add_or_update_entry(entry)?;
        self.store.save(&timesheet).await?;

        Ok(AttendanceOutcome::succeeded(
            command,
            "Successfully started break",
            state,
        ))
    }
}
