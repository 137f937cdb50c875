use anyhow::Result;

use crate::graphql::build_schema;
use crate::store::Store;

pub fn handle_schema() -> Result<()> {
    print!("{}", build_schema(Store::new()).sdl());
    Ok(())
}
