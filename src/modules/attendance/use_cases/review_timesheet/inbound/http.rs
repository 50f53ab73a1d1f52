use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::attendance::adapters::inbound::http::{
    application_error_response, employee_id_from, error_response,
};
use crate::modules::attendance::core::timesheet::TimesheetStatus;
use crate::modules::attendance::use_cases::review_timesheet::handler::ReviewAction;
use crate::shared::core::primitives::YearMonth;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ReviewTimesheetResponse {
    pub year_month: String,
    pub status: TimesheetStatus,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((year_month, action)): Path<(String, String)>,
) -> impl IntoResponse {
    let employee_id = match employee_id_from(&headers) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let period: YearMonth = match year_month.parse() {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("{e}")),
    };
    let action: ReviewAction = match action.parse() {
        Ok(a) => a,
        Err(e) => return error_response(StatusCode::NOT_FOUND, format!("{e}")),
    };

    match state
        .review_handler
        .handle(&employee_id, period, action)
        .await
    {
        Ok(status) => Json(ReviewTimesheetResponse {
            year_month: period.to_string(),
            status,
        })
        .into_response(),
        Err(e) => application_error_response(&e),
    }
}
