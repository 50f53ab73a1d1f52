// Pieces shared by the attendance HTTP handlers.
//
// - The acting employee comes from the `X-Employee-ID` header.
// - Punch bodies carry one timestamp; the per-operation field names are accepted as aliases.
//   A UTC offset is allowed and dropped, keeping the local wall clock.
// - A punch outcome maps to 200 on success and 400 on failure, with the same payload.

use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::attendance::core::errors::AttendanceError;
use crate::modules::attendance::use_cases::outcome::{ApplicationError, AttendanceOutcome};
use crate::modules::attendance::use_cases::punch::{AttendanceCommand, parse_wall_clock};
use crate::shared::infrastructure::timesheet_store::StoreError;

pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";

#[derive(Debug, Deserialize)]
pub struct PunchBody {
    #[serde(
        alias = "clock_in_time",
        alias = "clock_out_time",
        alias = "break_start_time",
        alias = "break_end_time",
        deserialize_with = "wall_clock"
    )]
    pub timestamp: NaiveDateTime,
}

fn wall_clock<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wall_clock(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw}: {e}")))
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn employee_id_from(headers: &HeaderMap) -> Result<String, Response> {
    headers
        .get(EMPLOYEE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            error_response(StatusCode::BAD_REQUEST, "X-Employee-ID header is required")
        })
}

pub fn punch_command(headers: &HeaderMap, body: PunchBody) -> Result<AttendanceCommand, Response> {
    Ok(AttendanceCommand::new(
        employee_id_from(headers)?,
        body.timestamp,
    ))
}

pub fn punch_response(outcome: AttendanceOutcome) -> Response {
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome)).into_response()
}

/// Status for a failed timesheet query or review.
pub fn application_error_response(error: &ApplicationError) -> Response {
    let status = match error {
        ApplicationError::Domain(AttendanceError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(AttendanceError::InvalidValue(_)) => StatusCode::BAD_REQUEST,
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::VersionMismatch { .. }) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::Backend(_)) => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "An error occurred");
        }
    };
    error_response(status, error.to_string())
}
