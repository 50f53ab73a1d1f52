// One calendar day of attendance for one employee.
//
// State machine
// - CLOCKED_OUT -> clock_in -> CLOCKED_IN
// - CLOCKED_IN -> start_break -> ON_BREAK -> end_break -> CLOCKED_IN
// - CLOCKED_IN -> clock_out -> CLOCKED_OUT (terminal for the day)
//
// Boundaries
// - Every transition is a pure function: it validates against `self` and returns a new
//   entry, or an error with `self` untouched. No input or output here.
// - The state is derived from transitions (or from stored data in `restore`), never set directly.

use crate::modules::attendance::core::break_interval::BreakInterval;
use crate::modules::attendance::core::errors::AttendanceError;
use crate::shared::core::primitives::{CalendarDate, Instant, Minutes, TimeRange};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceState {
    ClockedOut,
    ClockedIn,
    OnBreak,
}

impl AttendanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceState::ClockedOut => "clocked_out",
            AttendanceState::ClockedIn => "clocked_in",
            AttendanceState::OnBreak => "on_break",
        }
    }
}

impl fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceEvent {
    ClockIn(Instant),
    StartBreak(Instant),
    EndBreak(Instant),
    ClockOut(Instant),
}

impl AttendanceEvent {
    pub fn at(&self) -> Instant {
        match *self {
            AttendanceEvent::ClockIn(at)
            | AttendanceEvent::StartBreak(at)
            | AttendanceEvent::EndBreak(at)
            | AttendanceEvent::ClockOut(at) => at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    date: CalendarDate,
    state: AttendanceState,
    clock_in_at: Option<Instant>,
    clock_out_at: Option<Instant>,
    breaks: Vec<BreakInterval>,
    notes: String,
}

impl AttendanceEntry {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            state: AttendanceState::ClockedOut,
            clock_in_at: None,
            clock_out_at: None,
            breaks: Vec::new(),
            notes: String::new(),
        }
    }

    /// Rebuild an entry from stored parts, deriving the state from the data.
    pub fn restore(
        date: CalendarDate,
        clock_in_at: Option<Instant>,
        clock_out_at: Option<Instant>,
        breaks: Vec<BreakInterval>,
        notes: impl Into<String>,
    ) -> Result<Self, AttendanceError> {
        let state = match (clock_in_at, clock_out_at) {
            (None, Some(_)) => {
                return Err(AttendanceError::InvalidTimeRange(
                    "clock out time recorded without a clock in time".into(),
                ));
            }
            (None, None) if !breaks.is_empty() => {
                return Err(AttendanceError::InvalidTimeRange(
                    "breaks recorded without a clock in time".into(),
                ));
            }
            (None, None) => AttendanceState::ClockedOut,
            (Some(clock_in), Some(clock_out)) => {
                if clock_in >= clock_out {
                    return Err(AttendanceError::InvalidTimeRange(format!(
                        "clock in time {clock_in} must be before clock out time {clock_out}"
                    )));
                }
                AttendanceState::ClockedOut
            }
            (Some(_), None) if breaks.iter().any(BreakInterval::is_open) => {
                AttendanceState::OnBreak
            }
            (Some(_), None) => AttendanceState::ClockedIn,
        };

        if let Some(clock_in) = clock_in_at {
            for interval in &breaks {
                if interval.started_at() <= clock_in {
                    return Err(AttendanceError::InvalidTimeRange(format!(
                        "break {interval} must start after clock in time {clock_in}"
                    )));
                }
                if let Some(clock_out) = clock_out_at {
                    if interval.ended_at().is_none_or(|end| end >= clock_out) {
                        return Err(AttendanceError::InvalidTimeRange(format!(
                            "break {interval} must end before clock out time {clock_out}"
                        )));
                    }
                }
            }
        }
        BreakInterval::validate_no_overlaps(&breaks)?;

        Ok(Self {
            date,
            state,
            clock_in_at,
            clock_out_at,
            breaks,
            notes: notes.into(),
        })
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn state(&self) -> AttendanceState {
        self.state
    }

    pub fn clock_in_at(&self) -> Option<Instant> {
        self.clock_in_at
    }

    pub fn clock_out_at(&self) -> Option<Instant> {
        self.clock_out_at
    }

    pub fn breaks(&self) -> &[BreakInterval] {
        &self.breaks
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn open_break(&self) -> Option<&BreakInterval> {
        self.breaks.iter().find(|b| b.is_open())
    }

    pub fn with_notes(&self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self.clone()
        }
    }

    pub fn transition(&self, event: AttendanceEvent) -> Result<Self, AttendanceError> {
        match event {
            AttendanceEvent::ClockIn(at) => self.clock_in(at),
            AttendanceEvent::StartBreak(at) => self.start_break(at),
            AttendanceEvent::EndBreak(at) => self.end_break(at),
            AttendanceEvent::ClockOut(at) => self.clock_out(at),
        }
    }

    pub fn clock_in(&self, at: Instant) -> Result<Self, AttendanceError> {
        if self.state != AttendanceState::ClockedOut {
            return Err(AttendanceError::invalid_state("clock in", self.state));
        }
        if self.is_complete() {
            return Err(AttendanceError::InvalidStateTransition {
                operation: "clock in",
                state: format!("{} (shift on {} already completed)", self.state, self.date),
            });
        }
        Ok(Self {
            state: AttendanceState::ClockedIn,
            clock_in_at: Some(at),
            ..self.clone()
        })
    }

    pub fn start_break(&self, at: Instant) -> Result<Self, AttendanceError> {
        if self.state != AttendanceState::ClockedIn {
            return Err(AttendanceError::invalid_state("start break", self.state));
        }
        if let Some(clock_in) = self.clock_in_at {
            if at <= clock_in {
                return Err(AttendanceError::InvalidTimeRange(format!(
                    "break start time {at} must be after clock in time {clock_in}"
                )));
            }
        }
        if let Some(previous_end) = self.breaks.iter().filter_map(|b| b.ended_at()).max() {
            if at < previous_end {
                return Err(AttendanceError::InvalidTimeRange(format!(
                    "break start time {at} must not be before the previous break end {previous_end}"
                )));
            }
        }
        let mut breaks = self.breaks.clone();
        breaks.push(BreakInterval::open(at));
        Ok(Self {
            state: AttendanceState::OnBreak,
            breaks,
            ..self.clone()
        })
    }

    pub fn end_break(&self, at: Instant) -> Result<Self, AttendanceError> {
        if self.state != AttendanceState::OnBreak {
            return Err(AttendanceError::invalid_state("end break", self.state));
        }
        let Some(index) = self.breaks.iter().position(BreakInterval::is_open) else {
            return Err(AttendanceError::invalid_state("end break", "no ongoing break"));
        };
        let mut breaks = self.breaks.clone();
        breaks[index] = breaks[index].end(at)?;
        BreakInterval::validate_no_overlaps(&breaks)?;
        Ok(Self {
            state: AttendanceState::ClockedIn,
            breaks,
            ..self.clone()
        })
    }

    pub fn clock_out(&self, at: Instant) -> Result<Self, AttendanceError> {
        if self.state != AttendanceState::ClockedIn {
            return Err(AttendanceError::invalid_state("clock out", self.state));
        }
        if let Some(clock_in) = self.clock_in_at {
            if at <= clock_in {
                return Err(AttendanceError::InvalidTimeRange(format!(
                    "clock out time {at} must be after clock in time {clock_in}"
                )));
            }
        }
        if self
            .breaks
            .iter()
            .filter_map(|b| b.ended_at())
            .any(|end| end >= at)
        {
            return Err(AttendanceError::InvalidTimeRange(format!(
                "clock out time {at} must be after all break end times"
            )));
        }
        Ok(Self {
            state: AttendanceState::ClockedOut,
            clock_out_at: Some(at),
            ..self.clone()
        })
    }

    /// Shift span minus closed breaks, or `None` until the shift is complete.
    ///
    /// Clamped at zero if stored breaks ever outweigh the span.
    pub fn calculate_worked_minutes(&self) -> Option<Minutes> {
        let shift = TimeRange::new(self.clock_in_at?, self.clock_out_at?).ok()?;
        let span = shift.duration();
        let on_break = self.break_minutes();
        if on_break > span {
            tracing::warn!(
                date = %self.date,
                span = span.value(),
                on_break = on_break.value(),
                "break minutes exceed the shift span, clamping worked minutes to zero"
            );
        }
        Some(span.saturating_sub(on_break))
    }

    pub fn break_minutes(&self) -> Minutes {
        self.breaks.iter().filter_map(BreakInterval::duration).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.state == AttendanceState::ClockedOut
            && self.clock_in_at.is_some()
            && self.clock_out_at.is_some()
    }
}
