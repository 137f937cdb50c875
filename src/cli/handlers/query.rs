use anyhow::{Context, Result};

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    empty: bool,
) -> Result<()> {
    let response = execute(&ctx, &query, variables, empty)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Runs one GraphQL document against a fresh store built from `ctx`.
pub(super) fn execute(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
    empty: bool,
) -> Result<async_graphql::Response> {
    let schema = build_schema(ctx.store(empty));

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Variables must be a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}
