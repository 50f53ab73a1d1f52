// Shared test fixture for the punch command used by every attendance use case.

use crate::modules::attendance::use_cases::punch::AttendanceCommand;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceCommandDto {
    pub employee_id: String,
    pub timestamp: NaiveDateTime,
}

pub struct AttendanceCommandBuilder {
    inner: AttendanceCommand,
}

impl AttendanceCommandBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/attendance_command.json")
                .unwrap();
        let dto: AttendanceCommandDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: AttendanceCommand::new(dto.employee_id, dto.timestamp),
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    /// Local wall-clock time, e.g. `2024-01-15T17:00:00`.
    pub fn timestamp(mut self, v: &str) -> Self {
        self.inner.timestamp = v.parse().unwrap();
        self
    }

    pub fn build(self) -> AttendanceCommand {
        self.inner
    }
}

impl Default for AttendanceCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}
