use crate::modules::attendance::use_cases::outcome::{ApplicationError, AttendanceOutcome, report};
use crate::modules::attendance::use_cases::punch::{AttendanceCommand, load_entry};
use crate::shared::infrastructure::timesheet_store::TimesheetStore;
use std::sync::Arc;

pub struct EndBreakHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EndBreakHandler<TStore>
where
    TStore: TimesheetStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: AttendanceCommand) -> AttendanceOutcome {
        let result = self.execute(&command).await;
        report("end break", &command, result)
    }

    async fn execute(
        &self,
        command: &AttendanceCommand,
    ) -> Result<AttendanceOutcome, ApplicationError> {
        let punch = command.resolve()?;
        let (mut timesheet, entry) = load_entry(
            &*self.store,
            &punch,
            "No attendance entry found for this date",
        )
        .await?;

        let started_at = entry.open_break().map(|b| b.started_at());
        let entry = entry.end_break(punch.at)?;
        let state = entry.state();
        // the break that was open is the one whose start matches
        let duration = started_at.and_then(|start| {
            entry
                .breaks()
                .iter()
                .find(|b| b.started_at() == start)
                .and_then(|b| b.duration())
        });
        timesheet.add_or_update_entry(entry)?;
        self.store.save(&timesheet).await?;

        Ok(
            AttendanceOutcome::succeeded(command, "Successfully ended break", state)
                .with_break_duration(duration),
        )
    }
}
