use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use colored::Colorize;
use tokio::net::TcpListener;

use super::PostboardSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// `GET /` serves GraphiQL, `POST /` executes GraphQL requests.
pub fn router(schema: PostboardSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

/// Serves `schema` on `addr` until Ctrl-C is received.
pub async fn run_server(schema: PostboardSchema, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "GraphQL server listening");
    println!(
        "{} {}",
        "Server ready at:".green(),
        format!("http://{}/", local).cyan()
    );

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
