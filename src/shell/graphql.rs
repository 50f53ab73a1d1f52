use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::attendance::use_cases::clock_in::inbound::graphql::ClockInMutation;
use crate::modules::attendance::use_cases::clock_out::inbound::graphql::ClockOutMutation;
use crate::modules::attendance::use_cases::end_break::inbound::graphql::EndBreakMutation;
use crate::modules::attendance::use_cases::start_break::inbound::graphql::StartBreakMutation;
pub use crate::modules::attendance::use_cases::summarize_timesheet::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    ClockInMutation,
    ClockOutMutation,
    StartBreakMutation,
    EndBreakMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
