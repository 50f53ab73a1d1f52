use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::adapters::inbound::graphql::GqlTimesheetSummary;
use crate::shared::core::primitives::YearMonth;
use crate::shell::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn timesheet(
        &self,
        context: &Context<'_>,
        employee_id: String,
        year_month: String,
    ) -> GqlResult<GqlTimesheetSummary> {
        let state = context.data_unchecked::<AppState>();
        let period: YearMonth = year_month.parse()?;
        let summary = state
            .summarize_handler
            .handle(&employee_id, period)
            .await?;
        Ok(summary.into())
    }
}
