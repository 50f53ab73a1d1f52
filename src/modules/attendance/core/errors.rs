use crate::modules::attendance::core::break_interval::BreakInterval;
use crate::shared::core::primitives::{CalendarDate, PrimitiveError, YearMonth};

/// Closed set of domain failures. Callers branch on the kind: a wrong-state
/// failure ("wrong button") is distinct from a wrong-time failure.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AttendanceError {
    #[error("cannot {operation} when state is {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: String,
    },

    #[error("{0}")]
    InvalidTimeRange(String),

    #[error("break {first} overlaps with {second}")]
    OverlappingBreaks {
        first: BreakInterval,
        second: BreakInterval,
    },

    #[error("cannot modify timesheet with status {status}")]
    TimesheetAlreadySubmitted { status: String },

    #[error("entry date {date} does not match timesheet month {period}")]
    PeriodMismatch { date: CalendarDate, period: YearMonth },

    #[error("{0}")]
    NotFound(String),

    #[error("an entry for {date} already exists")]
    DuplicateEntry { date: CalendarDate },

    #[error(transparent)]
    InvalidValue(#[from] PrimitiveError),
}

impl AttendanceError {
    pub fn invalid_state(operation: &'static str, state: impl ToString) -> Self {
        AttendanceError::InvalidStateTransition {
            operation,
            state: state.to_string(),
        }
    }
}
