use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::attendance::use_cases::clock_in::inbound::http as clock_in_http;
use crate::modules::attendance::use_cases::clock_out::inbound::http as clock_out_http;
use crate::modules::attendance::use_cases::end_break::inbound::http as end_break_http;
use crate::modules::attendance::use_cases::review_timesheet::inbound::http as review_http;
use crate::modules::attendance::use_cases::start_break::inbound::http as start_break_http;
use crate::modules::attendance::use_cases::summarize_timesheet::inbound::http as summarize_http;
use crate::shell::state::AppState;

async fn ping() -> &'static str {
    "pong"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/v1/attendance/clock-in", post(clock_in_http::handle))
        .route("/v1/attendance/clock-out", post(clock_out_http::handle))
        .route("/v1/attendance/start-break", post(start_break_http::handle))
        .route("/v1/attendance/end-break", post(end_break_http::handle))
        .route("/v1/timesheets/{year_month}", get(summarize_http::handle))
        .route(
            "/v1/timesheets/{year_month}/{action}",
            post(review_http::handle),
        )
        .with_state(state)
}
