use anyhow::Result;

use super::CommandContext;
use super::query::execute;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    empty: bool,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let response = execute(&ctx, &document, variables, empty)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
