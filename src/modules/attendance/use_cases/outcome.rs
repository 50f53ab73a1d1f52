use crate::modules::attendance::core::entry::AttendanceState;
use crate::modules::attendance::core::errors::AttendanceError;
use crate::modules::attendance::use_cases::punch::AttendanceCommand;
use crate::shared::core::primitives::{Instant, Minutes, PrimitiveError};
use crate::shared::infrastructure::timesheet_store::StoreError;
use serde::Serialize;
use thiserror::Error;

pub const ERROR_STATE: &str = "error";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] AttendanceError),
}

impl From<PrimitiveError> for ApplicationError {
    fn from(error: PrimitiveError) -> Self {
        ApplicationError::Domain(AttendanceError::InvalidValue(error))
    }
}

/// Transport-agnostic result of a punch. Failures are values, never panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceOutcome {
    pub success: bool,
    pub message: String,
    pub employee_id: String,
    pub date: String,
    pub timestamp: String,
    pub current_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worked_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_duration_minutes: Option<i64>,
}

impl AttendanceOutcome {
    pub fn succeeded(
        command: &AttendanceCommand,
        message: impl Into<String>,
        state: AttendanceState,
    ) -> Self {
        Self::echo(command, true, message.into(), state.as_str().to_string())
    }

    pub fn failed(command: &AttendanceCommand, error: &ApplicationError) -> Self {
        let message = match error {
            ApplicationError::Domain(error) => error.to_string(),
            ApplicationError::Store(error) => format!("An error occurred: {error}"),
        };
        Self::echo(command, false, message, ERROR_STATE.to_string())
    }

    pub fn with_worked_minutes(mut self, worked: Option<Minutes>) -> Self {
        self.worked_minutes = worked.map(|m| m.value());
        self
    }

    pub fn with_break_duration(mut self, duration: Option<Minutes>) -> Self {
        self.break_duration_minutes = duration.map(|m| m.value());
        self
    }

    fn echo(command: &AttendanceCommand, success: bool, message: String, state: String) -> Self {
        let at = Instant::new(command.timestamp);
        Self {
            success,
            message,
            employee_id: command.employee_id.clone(),
            date: at.date().to_string(),
            timestamp: at.to_iso8601(),
            current_state: state,
            worked_minutes: None,
            break_duration_minutes: None,
        }
    }
}

/// Fold the result of a punch into its outcome, logging at the level the failure deserves.
pub fn report(
    operation: &'static str,
    command: &AttendanceCommand,
    result: Result<AttendanceOutcome, ApplicationError>,
) -> AttendanceOutcome {
    match result {
        Ok(outcome) => {
            tracing::info!(
                operation,
                employee_id = %command.employee_id,
                state = %outcome.current_state,
                "attendance recorded"
            );
            outcome
        }
        Err(error) => {
            match &error {
                ApplicationError::Domain(reason) => tracing::warn!(
                    operation,
                    employee_id = %command.employee_id,
                    %reason,
                    "attendance rejected"
                ),
                ApplicationError::Store(reason) => tracing::error!(
                    operation,
                    employee_id = %command.employee_id,
                    %reason,
                    "attendance store failure"
                ),
            }
            AttendanceOutcome::failed(command, &error)
        }
    }
}
