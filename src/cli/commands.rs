use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL endpoint for users and their posts"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (uses ./postboard.yml when present)
    #[arg(long, global = true, env = "POSTBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (overrides config)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a postboard.yml with the default settings to the current directory
    Init {
        /// Port to listen on (default 4000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (default 127.0.0.1)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Start the server with no users or posts
        #[arg(long)]
        empty: bool,

        /// Overwrite an existing postboard.yml
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on (default 4000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (default 127.0.0.1)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Start with no users or posts instead of the demo data
        #[arg(long)]
        empty: bool,
    },

    /// Execute a GraphQL query against a fresh store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Start with no users or posts instead of the demo data
        #[arg(long)]
        empty: bool,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Start with no users or posts instead of the demo data
        #[arg(long)]
        empty: bool,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
