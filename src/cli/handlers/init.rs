use anyhow::Result;
use colored::Colorize;
use std::net::IpAddr;

use crate::config::{DEFAULT_CONFIG_FILE, PostboardConfig};

pub fn handle_init(
    port: Option<u16>,
    host: Option<IpAddr>,
    empty: bool,
    force: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = PostboardConfig::default();
    if let Some(p) = port {
        config.server.port = p;
    }
    if let Some(h) = host {
        config.server.host = h;
    }
    config.store.seed = !empty;

    config.save(&config_path)?;

    println!("{} {}", "Wrote".green(), config_path.display());
    println!("  Listen: http://{}/", config.server.addr());
    println!(
        "  Store:  {}",
        if config.store.seed { "demo data" } else { "empty" }
    );
    Ok(())
}
