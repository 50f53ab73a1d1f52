use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::attendance::adapters::inbound::http::{
    PunchBody, error_response, punch_command, punch_response,
};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<PunchBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(b)) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };
    let command = match punch_command(&headers, body) {
        Ok(c) => c,
        Err(response) => return response,
    };

    punch_response(state.end_break_handler.handle(command).await)
}
