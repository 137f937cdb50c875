use crate::error::{PostboardError, Result};
use crate::store::Store;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "postboard.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostboardConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Start with the demo users and posts instead of an empty store.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl StoreSettings {
    pub fn build_store(&self) -> Store {
        if self.seed {
            Store::seeded()
        } else {
            Store::new()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl PostboardConfig {
    /// Loads `path` if given, otherwise `postboard.yml` in `cwd` when present,
    /// otherwise the defaults. An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>, cwd: &Path) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(PostboardError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Self::from_file(p)
            }
            None => {
                let default_path = cwd.join(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is valid and means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PostboardConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
