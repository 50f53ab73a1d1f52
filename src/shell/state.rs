use crate::modules::attendance::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::attendance::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::attendance::use_cases::end_break::handler::EndBreakHandler;
use crate::modules::attendance::use_cases::review_timesheet::handler::ReviewTimesheetHandler;
use crate::modules::attendance::use_cases::start_break::handler::StartBreakHandler;
use crate::modules::attendance::use_cases::summarize_timesheet::handler::SummarizeTimesheetHandler;
use crate::shared::core::primitives::Minutes;
use crate::shared::infrastructure::timesheet_store::in_memory::InMemoryTimesheetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub clock_in_handler: Arc<ClockInHandler<InMemoryTimesheetStore>>,
    pub clock_out_handler: Arc<ClockOutHandler<InMemoryTimesheetStore>>,
    pub start_break_handler: Arc<StartBreakHandler<InMemoryTimesheetStore>>,
    pub end_break_handler: Arc<EndBreakHandler<InMemoryTimesheetStore>>,
    pub summarize_handler: Arc<SummarizeTimesheetHandler<InMemoryTimesheetStore>>,
    pub review_handler: Arc<ReviewTimesheetHandler<InMemoryTimesheetStore>>,
}

impl AppState {
    /// Wire every use case onto one shared store.
    pub fn new(store: Arc<InMemoryTimesheetStore>, standard_minutes_per_day: Minutes) -> Self {
        Self {
            clock_in_handler: Arc::new(ClockInHandler::new(store.clone())),
            clock_out_handler: Arc::new(ClockOutHandler::new(store.clone())),
            start_break_handler: Arc::new(StartBreakHandler::new(store.clone())),
            end_break_handler: Arc::new(EndBreakHandler::new(store.clone())),
            summarize_handler: Arc::new(SummarizeTimesheetHandler::new(
                store.clone(),
                standard_minutes_per_day,
            )),
            review_handler: Arc::new(ReviewTimesheetHandler::new(store)),
        }
    }
}
