//! Key-value settings storage backed by SQLite.
//!
//! Holds the API base URL and bearer token between runs. Values given on
//! the command line or in the environment take part in resolution through
//! [`resolve_base_url`] and [`resolve_token`].

use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use std::sync::Mutex;

use crate::consts::{DEFAULT_BASE_URL, TOKEN_ENV};

pub const BASE_URL_KEY: &str = "base_url";
pub const TOKEN_KEY: &str = "token";

/// Keys `surprise config` accepts.
pub const KNOWN_KEYS: &[&str] = &[BASE_URL_KEY, TOKEN_KEY];

/// Persistent settings store: one row per known key.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the settings table in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open settings database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create settings table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Store a setting, replacing any previous value.
    ///
    /// Only [`KNOWN_KEYS`] are accepted. Values are trimmed and must not be
    /// empty; a base URL must be `http(s)://` and loses its trailing `/`.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        let value = normalize(key, value)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value.as_str()],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM settings WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Reject keys the CLI does not know about.
pub fn check_key(key: &str) -> Result<()> {
    if !KNOWN_KEYS.contains(&key) {
        bail!(
            "unknown config key: {key} (expected one of: {})",
            KNOWN_KEYS.join(", ")
        );
    }
    Ok(())
}

fn normalize(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        bail!("{key} cannot be empty; use `surprise config unset {key}` to clear it");
    }
    if key == BASE_URL_KEY {
        if !(value.starts_with("http://") || value.starts_with("https://")) {
            bail!("base_url must start with http:// or https://, got {value}");
        }
        return Ok(value.trim_end_matches('/').to_string());
    }
    Ok(value.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Base URL priority: flag → environment → stored → default.
pub fn resolve_base_url(
    flag: Option<&str>,
    env: Option<String>,
    config: &Config,
) -> Result<String> {
    if let Some(url) = non_empty(flag.map(str::to_string)) {
        return Ok(url);
    }
    if let Some(url) = non_empty(env) {
        return Ok(url);
    }
    if let Some(url) = non_empty(config.get(BASE_URL_KEY)?) {
        return Ok(url);
    }
    Ok(DEFAULT_BASE_URL.to_string())
}

/// Token priority: flag → stored → environment.
pub fn resolve_token(flag: Option<&str>, env: Option<String>, config: &Config) -> Result<String> {
    if let Some(token) = non_empty(flag.map(str::to_string)) {
        return Ok(token);
    }
    if let Some(token) = non_empty(config.get(TOKEN_KEY)?) {
        return Ok(token);
    }
    if let Some(token) = non_empty(env) {
        return Ok(token);
    }
    bail!("no API token found. Run `surprise config set token <TOKEN>` or set {TOKEN_ENV}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_config() -> Config {
        Config::open(":memory:").unwrap()
    }

    #[test]
    fn unset_keys_read_as_none() {
        let config = mem_config();
        assert!(config.get(TOKEN_KEY).unwrap().is_none());
        assert!(config.get(BASE_URL_KEY).unwrap().is_none());
    }

    #[test]
    fn token_round_trips_trimmed() {
        let config = mem_config();
        config.set(TOKEN_KEY, "  sk-live-1234 \n").unwrap();
        assert_eq!(config.get(TOKEN_KEY).unwrap().unwrap(), "sk-live-1234");
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = mem_config();
        config.set(BASE_URL_KEY, "https://chat.example.com/").unwrap();
        assert_eq!(
            config.get(BASE_URL_KEY).unwrap().unwrap(),
            "https://chat.example.com"
        );
    }

    #[test]
    fn second_set_replaces_first() {
        let config = mem_config();
        config.set(TOKEN_KEY, "old").unwrap();
        config.set(TOKEN_KEY, "new").unwrap();
        assert_eq!(config.get(TOKEN_KEY).unwrap().unwrap(), "new");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let config = mem_config();
        let err = config.set("theme", "dark").unwrap_err().to_string();
        assert!(err.contains("unknown config key: theme"));
        assert!(config.get("theme").unwrap().is_none());
    }

    #[test]
    fn set_rejects_empty_value() {
        let config = mem_config();
        let err = config.set(TOKEN_KEY, "   ").unwrap_err().to_string();
        assert!(err.contains("config unset token"));
    }

    #[test]
    fn set_rejects_base_url_without_scheme() {
        let config = mem_config();
        assert!(config.set(BASE_URL_KEY, "chat.example.com").is_err());
        assert!(config.get(BASE_URL_KEY).unwrap().is_none());
    }

    #[test]
    fn remove_clears_token_and_tolerates_missing() {
        let config = mem_config();
        config.set(TOKEN_KEY, "secret").unwrap();
        config.remove(TOKEN_KEY).unwrap();
        assert!(config.get(TOKEN_KEY).unwrap().is_none());
        config.remove(TOKEN_KEY).unwrap();
    }

    #[test]
    fn settings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surprise.db");
        let path_str = path.to_str().unwrap();

        Config::open(path_str)
            .unwrap()
            .set(BASE_URL_KEY, "http://persisted")
            .unwrap();

        let reopened = Config::open(path_str).unwrap();
        assert_eq!(
            reopened.get(BASE_URL_KEY).unwrap().unwrap(),
            "http://persisted"
        );
    }

    #[test]
    fn check_key_accepts_known_and_rejects_unknown() {
        assert!(check_key("base_url").is_ok());
        assert!(check_key("token").is_ok());
        let err = check_key("theme").unwrap_err().to_string();
        assert!(err.contains("theme"));
    }

    #[test]
    fn base_url_flag_beats_everything() {
        let config = mem_config();
        config.set(BASE_URL_KEY, "http://stored").unwrap();
        let url =
            resolve_base_url(Some("http://flag"), Some("http://env".to_string()), &config).unwrap();
        assert_eq!(url, "http://flag");
    }

    #[test]
    fn base_url_env_beats_stored() {
        let config = mem_config();
        config.set(BASE_URL_KEY, "http://stored").unwrap();
        let url = resolve_base_url(None, Some("http://env".to_string()), &config).unwrap();
        assert_eq!(url, "http://env");
    }

    #[test]
    fn base_url_falls_back_to_stored_then_default() {
        let config = mem_config();
        assert_eq!(
            resolve_base_url(None, Some(String::new()), &config).unwrap(),
            DEFAULT_BASE_URL
        );
        config.set(BASE_URL_KEY, "http://stored").unwrap();
        assert_eq!(
            resolve_base_url(None, None, &config).unwrap(),
            "http://stored"
        );
    }

    #[test]
    fn token_stored_beats_env() {
        let config = mem_config();
        config.set(TOKEN_KEY, "stored").unwrap();
        let token = resolve_token(None, Some("env".to_string()), &config).unwrap();
        assert_eq!(token, "stored");
    }

    #[test]
    fn token_falls_back_to_env() {
        let config = mem_config();
        let token = resolve_token(None, Some("env".to_string()), &config).unwrap();
        assert_eq!(token, "env");
    }

    #[test]
    fn missing_token_explains_how_to_set_one() {
        let config = mem_config();
        let err = resolve_token(Some(""), None, &config).unwrap_err().to_string();
        assert!(err.contains("config set token"));
        assert!(err.contains(TOKEN_ENV));
    }
}
