use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::adapters::inbound::graphql::{GqlAttendanceOutcome, punch_command};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartBreakMutation;

#[Object]
impl StartBreakMutation {
    async fn start_break(
        &self,
        context: &Context<'_>,
        employee_id: String,
        timestamp: String,
    ) -> GqlResult<GqlAttendanceOutcome> {
        let state = context.data_unchecked::<AppState>();
        let command = punch_command(employee_id, &timestamp)?;
        Ok(state.start_break_handler.handle(command).await.into())
    }
}
