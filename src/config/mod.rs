mod loader;
mod schema;

pub use loader::load_config;
pub use loader::validate_config;
pub use schema::*;

use anyhow::Result;
use std::path::Path;

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_config(path)
    }
}
