use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::attendance::adapters::inbound::http::{
    application_error_response, employee_id_from, error_response,
};
use crate::shared::core::primitives::YearMonth;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(year_month): Path<String>,
) -> impl IntoResponse {
    let employee_id = match employee_id_from(&headers) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let period: YearMonth = match year_month.parse() {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, format!("{e}")),
    };

    match state.summarize_handler.handle(&employee_id, period).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => application_error_response(&e),
    }
}
