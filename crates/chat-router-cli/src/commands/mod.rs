pub mod check;
pub mod resolve;
pub mod routes;

use std::path::Path;

use anyhow::Result;
use chat_router::{Config, RouteTable};

/// Loads the table from `path`, or from `./routes.toml` / built-in defaults
pub fn load_table(path: Option<&Path>) -> Result<RouteTable> {
    let config = match path {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Config file not found: {:?}", path);
            Config::load(path)?
        }
        None => Config::load_default()?,
    };

    let table = config.into_table()?;
    tracing::debug!(routes = table.len(), "route table loaded");

    Ok(table)
}
