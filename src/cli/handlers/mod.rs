mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::PostboardConfig;
use crate::store::Store;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PostboardConfig,
}

impl CommandContext {
    pub fn new(config: PostboardConfig) -> Self {
        Self { config }
    }

    /// A fresh store: empty when `empty` is set, otherwise as configured.
    pub fn store(&self, empty: bool) -> Store {
        if empty {
            Store::new()
        } else {
            self.config.store.build_store()
        }
    }
}
