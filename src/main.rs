use anyhow::{Context, Result};
use clap::Parser;

use postboard::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use postboard::cli::{Cli, Commands};
use postboard::config::PostboardConfig;
use postboard::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config file, so it must not depend on loading one.
    if let Commands::Init {
        port,
        host,
        empty,
        force,
    } = cli.command
    {
        return handle_init(port, host, empty, force);
    }

    let cwd = std::env::current_dir()?;
    let config = PostboardConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load postboard configuration")?;

    let log_file = cli.log_file.or_else(|| config.log.file.clone());
    logging::init(cli.verbose, log_file.as_deref());

    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Init {
            port,
            host,
            empty,
            force,
        } => handle_init(port, host, empty, force),
        Commands::Serve { port, host, empty } => handle_serve(ctx, port, host, empty),
        Commands::Query {
            query,
            variables,
            empty,
        } => handle_query(ctx, query, variables, empty),
        Commands::Mutate {
            mutation,
            variables,
            empty,
        } => handle_mutate(ctx, mutation, variables, empty),
        Commands::Schema => handle_schema(),
    }
}
