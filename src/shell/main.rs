use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shared::infrastructure::timesheet_store::in_memory::InMemoryTimesheetStore;
use attendance::shell::config::AppConfig;
use attendance::shell::graphql::{AppSchema, schema};
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryTimesheetStore::new());
    let state = AppState::new(store, config.standard_minutes_per_day);

    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(
        standard_minutes_per_day = config.standard_minutes_per_day.value(),
        "HTTP endpoint: http://{}/v1, GraphQL endpoint: http://{}/gql",
        config.addr,
        config.addr
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
