//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Base URL used when neither a flag, the environment, nor the config store
/// provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path prefix shared by every surprise endpoint.
pub const API_PREFIX: &str = "/api/v1/surprises";

pub const BASE_URL_ENV: &str = "SURPRISE_BASE_URL";
pub const TOKEN_ENV: &str = "SURPRISE_TOKEN";

/// Default database path: `~/.surprise/surprise.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".surprise").join("surprise.db"))
}
