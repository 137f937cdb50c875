use anyhow::{Context, Result};
use std::net::IpAddr;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    port: Option<u16>,
    host: Option<IpAddr>,
    empty: bool,
) -> Result<()> {
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    let addr = ctx.config.server.addr();

    let store = ctx.store(empty);
    tracing::info!(
        users = store.users().len(),
        posts = store.posts().len(),
        "Starting with in-memory store"
    );
    let schema = build_schema(store);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, addr))
        .with_context(|| format!("Failed to serve on {}", addr))?;
    Ok(())
}
